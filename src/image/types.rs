//! Request and outcome types for DALL-E 3 image generation.

use serde::Serialize;

/// Prompt used when the user submits empty input.
pub const DEFAULT_PROMPT: &str = "A beautiful sunset over the mountains";

/// Supported DALL-E 3 output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ImageSize {
    /// 1024x1024, the fastest to generate.
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    /// 1792x1024 widescreen.
    #[serde(rename = "1792x1024")]
    Widescreen,
    /// 1024x1792 vertical.
    #[serde(rename = "1024x1792")]
    Vertical,
}

impl ImageSize {
    /// Resolves a menu selection; anything other than "2" or "3" falls back
    /// to the square default.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Self::Widescreen,
            "3" => Self::Vertical,
            _ => Self::Square,
        }
    }

    /// Returns the wire dimension string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Widescreen => "1792x1024",
            Self::Vertical => "1024x1792",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    /// Less hyper-real, closer to the DALL-E 2 look.
    Natural,
    /// Hyper-real and cinematic.
    #[default]
    Vivid,
}

impl ImageStyle {
    /// Resolves a menu selection; anything other than "1" falls back to vivid.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::Natural,
            _ => Self::Vivid,
        }
    }

    /// Returns the wire style string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Vivid => "vivid",
        }
    }
}

impl std::fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendering quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    /// Standard quality, faster.
    #[default]
    Standard,
    /// Finely detailed, more consistent.
    Hd,
}

impl ImageQuality {
    /// Resolves a menu selection; anything other than "2" falls back to
    /// standard.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Self::Hd,
            _ => Self::Standard,
        }
    }

    /// Returns the wire quality string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hd => "hd",
        }
    }
}

impl std::fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the service should return the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// A URL to download the image from.
    #[default]
    Url,
    /// A Base64-encoded payload embedded in the response.
    B64Json,
}

impl ResponseFormat {
    /// Resolves a menu selection; anything other than "2" falls back to URL.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Self::B64Json,
            _ => Self::Url,
        }
    }

    /// Returns the wire format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::B64Json => "b64_json",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to generate an image.
///
/// Every field is a closed enum (or the prompt, which is never empty), so a
/// value of this type is always a well-formed request body.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// The text prompt describing the desired image.
    pub prompt: String,
    /// Output dimensions.
    pub size: ImageSize,
    /// Number of images to generate. DALL-E 3 only supports 1.
    pub n: u32,
    /// Rendering quality.
    pub quality: ImageQuality,
    /// Rendering style.
    pub style: ImageStyle,
    /// How the image should be returned.
    pub response_format: ResponseFormat,
}

impl ImageRequest {
    /// Creates a request with the given prompt and default options.
    ///
    /// Empty or whitespace-only prompts are replaced with [`DEFAULT_PROMPT`]
    /// rather than sent to the service.
    pub fn new(prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        let prompt = if prompt.trim().is_empty() {
            DEFAULT_PROMPT.to_string()
        } else {
            prompt
        };

        Self {
            prompt,
            size: ImageSize::default(),
            n: 1,
            quality: ImageQuality::default(),
            style: ImageStyle::default(),
            response_format: ResponseFormat::default(),
        }
    }

    /// Sets the output dimensions.
    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the rendering quality.
    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the rendering style.
    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the response format.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }
}

/// A single generated image as reported by the service.
///
/// When the request asked for `b64_json`, the service still returns the
/// payload in the `url` field; only the presentation label differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Image locator: a download URL, or the Base64 payload itself.
    pub url: String,
    /// The prompt as rewritten by the service, if it rewrote it.
    pub revised_prompt: Option<String>,
}

/// Normalized result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The service produced a well-formed response. `images` may be empty
    /// if the response carried no data entries.
    Success {
        /// Unix timestamp reported by the service.
        created: u64,
        /// Generated images, in response order.
        images: Vec<GeneratedImage>,
    },
    /// The service reported an error, or the call failed outright.
    Failure {
        /// Service error code, when the error body carried one.
        code: Option<String>,
        /// Error message, or the raw response body when unclassifiable.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_choice() {
        assert_eq!(ImageSize::from_choice("2"), ImageSize::Widescreen);
        assert_eq!(ImageSize::from_choice("3"), ImageSize::Vertical);
        assert_eq!(ImageSize::from_choice("1"), ImageSize::Square);
        assert_eq!(ImageSize::from_choice(""), ImageSize::Square);
        assert_eq!(ImageSize::from_choice("7"), ImageSize::Square);
        assert_eq!(ImageSize::from_choice("banana"), ImageSize::Square);
    }

    #[test]
    fn test_style_from_choice() {
        assert_eq!(ImageStyle::from_choice("1"), ImageStyle::Natural);
        assert_eq!(ImageStyle::from_choice("2"), ImageStyle::Vivid);
        assert_eq!(ImageStyle::from_choice(""), ImageStyle::Vivid);
        assert_eq!(ImageStyle::from_choice("0"), ImageStyle::Vivid);
    }

    #[test]
    fn test_quality_from_choice() {
        assert_eq!(ImageQuality::from_choice("2"), ImageQuality::Hd);
        assert_eq!(ImageQuality::from_choice("1"), ImageQuality::Standard);
        assert_eq!(ImageQuality::from_choice(""), ImageQuality::Standard);
        assert_eq!(ImageQuality::from_choice("hd"), ImageQuality::Standard);
    }

    #[test]
    fn test_format_from_choice() {
        assert_eq!(ResponseFormat::from_choice("2"), ResponseFormat::B64Json);
        assert_eq!(ResponseFormat::from_choice("1"), ResponseFormat::Url);
        assert_eq!(ResponseFormat::from_choice(""), ResponseFormat::Url);
    }

    #[test]
    fn test_empty_prompt_falls_back() {
        assert_eq!(ImageRequest::new("").prompt, DEFAULT_PROMPT);
        assert_eq!(ImageRequest::new("   ").prompt, DEFAULT_PROMPT);
        assert_eq!(ImageRequest::new("a red door").prompt, "a red door");
    }

    #[test]
    fn test_request_defaults() {
        let request = ImageRequest::new("test");
        assert_eq!(request.size, ImageSize::Square);
        assert_eq!(request.style, ImageStyle::Vivid);
        assert_eq!(request.quality, ImageQuality::Standard);
        assert_eq!(request.response_format, ResponseFormat::Url);
        assert_eq!(request.n, 1);
    }

    #[test]
    fn test_wire_serialization() {
        let request = ImageRequest::new("a red door")
            .with_size(ImageSize::Widescreen)
            .with_style(ImageStyle::Natural)
            .with_quality(ImageQuality::Hd)
            .with_response_format(ResponseFormat::B64Json);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "a red door");
        assert_eq!(json["size"], "1792x1024");
        assert_eq!(json["n"], 1);
        assert_eq!(json["quality"], "hd");
        assert_eq!(json["style"], "natural");
        assert_eq!(json["response_format"], "b64_json");
    }

    #[test]
    fn test_wire_serialization_defaults() {
        let json = serde_json::to_value(ImageRequest::new("x")).unwrap();
        assert_eq!(json["size"], "1024x1024");
        assert_eq!(json["quality"], "standard");
        assert_eq!(json["style"], "vivid");
        assert_eq!(json["response_format"], "url");
    }
}
