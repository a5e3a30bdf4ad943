use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while reading input: {}", e)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn confirm_parse_command_error_message() {
        let err = AppError::ParseCommand("7".to_string());

        assert_eq!(format!("{}", err), "Unrecognized command: '7'");
    }

    #[test]
    fn io_error_converts_into_app_error() {
        let err: AppError = std::io::Error::other("closed").into();

        assert!(format!("{}", err).contains("I/O error while reading input: "));
    }
}
