use thiserror::Error;

/// Errors originating from the complex number library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = CoreError::InvalidArgument {
            argument: "a",
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid argument `a`: must be positive");
    }
}
