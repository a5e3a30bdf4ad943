pub use crate::cli::run::run_app;
pub use crate::cli::{AssumeYes, ConfirmDialog, StdinConfirm};
pub use crate::domain::{
    contact::Contact,
    store::{ContactEvents, ContactStore, StatusMessage},
};
pub use crate::errors::AppError;
