use contact_list::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
