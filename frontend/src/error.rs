use thiserror::Error;

/// Rejections raised by the task and leave controllers.
///
/// Views treat these as silent no-ops; they are only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task title must not be blank")]
    BlankTitle,
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("invalid runtime config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ValidationError::MissingField("reason");
        assert_eq!(err.to_string(), "reason is required");
    }

    #[test]
    fn start_up_errors_describe_their_source() {
        let err = AppError::Config("unknown time zone `Mars/Olympus`".into());
        assert_eq!(
            err.to_string(),
            "invalid runtime config: unknown time zone `Mars/Olympus`"
        );

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse.into();
        assert!(err.to_string().starts_with("failed to load seed data:"));
    }
}
