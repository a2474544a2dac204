use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Selection required: {0}")]
    SelectionRequired(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// True for errors caused by user input that the UI reports and recovers from.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::SelectionRequired(_))
    }

    /// The failed precondition without the category prefix, for dialogs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::SelectionRequired(msg) | Self::Config(msg) => {
                msg.clone()
            }
            Self::Io(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        let err = TodoError::Validation("task text must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: task text must not be empty"
        );

        let err = TodoError::SelectionRequired("select a task to delete it".to_string());
        assert_eq!(err.to_string(), "Selection required: select a task to delete it");
    }

    #[test]
    fn test_user_facing_kinds() {
        assert!(TodoError::Validation(String::new()).is_user_facing());
        assert!(TodoError::SelectionRequired(String::new()).is_user_facing());
        assert!(!TodoError::Config(String::new()).is_user_facing());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!TodoError::from(io).is_user_facing());
    }

    #[test]
    fn test_user_message_strips_prefix() {
        let err = TodoError::SelectionRequired("select a task to mark it".to_string());
        assert_eq!(err.user_message(), "select a task to mark it");
    }
}
