//! Error types for the Azure DALL-E client.

/// Errors that can occur before or during a generation call.
#[derive(Debug, thiserror::Error)]
pub enum DalleError {
    /// One or more required configuration values are missing.
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, DalleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_display() {
        let err = DalleError::MissingConfig(vec![
            "AZURE_OPENAI_RESOURCE_NAME".into(),
            "AZURE_OPENAI_API_KEY".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "missing environment variables: AZURE_OPENAI_RESOURCE_NAME, AZURE_OPENAI_API_KEY"
        );
    }
}
