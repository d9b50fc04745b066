//! Image generation module.

mod azure;
mod types;

pub use azure::{AzureDalleClient, API_VERSION};
pub use types::{
    GeneratedImage, GenerationOutcome, ImageQuality, ImageRequest, ImageSize, ImageStyle,
    ResponseFormat, DEFAULT_PROMPT,
};
