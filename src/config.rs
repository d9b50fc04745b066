//! Connection configuration for the Azure OpenAI resource.

use crate::error::{DalleError, Result};
use std::env;

/// Environment variable naming the Azure OpenAI resource.
pub const RESOURCE_NAME_VAR: &str = "AZURE_OPENAI_RESOURCE_NAME";
/// Environment variable naming the DALL-E deployment.
pub const DEPLOYMENT_NAME_VAR: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";

/// Connection parameters for an Azure OpenAI DALL-E deployment.
///
/// Built once at startup and passed by reference into the client, so no
/// component reads the process environment behind the caller's back.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    /// Azure OpenAI resource name (the `{resource}` in
    /// `https://{resource}.openai.azure.com`).
    pub resource_name: String,
    /// Name of the DALL-E 3 deployment under that resource.
    pub deployment_name: String,
    /// API key, sent as the `api-key` request header.
    pub api_key: String,
}

impl AzureConfig {
    /// Reads the configuration from the process environment.
    ///
    /// All three variables are checked before returning, so the error lists
    /// every missing variable at once rather than failing on the first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary lookup function.
    ///
    /// Whitespace-only values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();
        let mut require = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name.to_string());
                String::new()
            }
        };

        let resource_name = require(RESOURCE_NAME_VAR);
        let deployment_name = require(DEPLOYMENT_NAME_VAR);
        let api_key = require(API_KEY_VAR);

        if !missing.is_empty() {
            return Err(DalleError::MissingConfig(missing));
        }

        Ok(Self {
            resource_name,
            deployment_name,
            api_key,
        })
    }
}
