//! Error types for mapping provider payloads into domain models.

/// Raised when a provider payload cannot be mapped into a domain model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {model} payload: {source}")]
    Invalid {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ModelError {
    pub(crate) fn invalid(model: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ModelError::Invalid { model, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ModelError::MissingField("billId");
        assert_eq!(err.to_string(), "Missing required field: billId");
    }

    #[test]
    fn test_invalid_message_names_model() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = ModelError::invalid("invoice")(source);
        assert!(err.to_string().starts_with("Invalid invoice payload:"));
    }
}
