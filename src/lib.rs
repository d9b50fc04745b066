#![warn(missing_docs)]
//! Console client for Azure OpenAI DALL-E 3 image generation.
//!
//! This crate maps a handful of discrete user selections into a validated
//! generation request, POSTs it to an Azure OpenAI deployment, and
//! normalizes the two possible response shapes (success vs. service error)
//! into a single [`GenerationOutcome`].
//!
//! # Quick Start
//!
//! ```no_run
//! use aoai_dalle3::{AzureConfig, AzureDalleClient, GenerationOutcome, ImageRequest, ImageSize};
//!
//! #[tokio::main]
//! async fn main() -> aoai_dalle3::Result<()> {
//!     let config = AzureConfig::from_env()?;
//!     let client = AzureDalleClient::new(&config);
//!
//!     let request = ImageRequest::new("A red door in fresh snow")
//!         .with_size(ImageSize::Widescreen);
//!
//!     match client.generate(&request).await {
//!         GenerationOutcome::Success { images, .. } => {
//!             for image in images {
//!                 println!("{}", image.url);
//!             }
//!         }
//!         GenerationOutcome::Failure { code, message } => {
//!             eprintln!("generation failed ({code:?}): {message}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod image;

pub use config::AzureConfig;
pub use error::{DalleError, Result};
pub use image::{
    AzureDalleClient, GeneratedImage, GenerationOutcome, ImageQuality, ImageRequest, ImageSize,
    ImageStyle, ResponseFormat, API_VERSION, DEFAULT_PROMPT,
};
