//! Interactive CLI for Azure OpenAI DALL-E 3 image generation.

use aoai_dalle3::{
    AzureConfig, AzureDalleClient, DalleError, GenerationOutcome, ImageQuality, ImageRequest,
    ImageSize, ImageStyle, ResponseFormat,
};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "aoai-dalle3")]
#[command(about = "Generate DALL-E 3 images via an Azure OpenAI deployment")]
#[command(version)]
struct Cli {
    /// The text prompt describing the image. When given, the interactive
    /// prompts are skipped and the other flags supply the options.
    #[arg(short, long)]
    prompt: Option<String>,

    /// Image size
    #[arg(long, value_enum, default_value = "1024x1024")]
    size: SizeArg,

    /// Image style
    #[arg(long, value_enum, default_value = "vivid")]
    style: StyleArg,

    /// Image quality
    #[arg(long, value_enum, default_value = "standard")]
    quality: QualityArg,

    /// Response format
    #[arg(long, value_enum, default_value = "url")]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    #[value(name = "1024x1024")]
    Square,
    #[value(name = "1792x1024")]
    Widescreen,
    #[value(name = "1024x1792")]
    Vertical,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Natural,
    Vivid,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QualityArg {
    Standard,
    Hd,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Url,
    #[value(name = "b64_json")]
    B64Json,
}

impl From<SizeArg> for ImageSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Square => ImageSize::Square,
            SizeArg::Widescreen => ImageSize::Widescreen,
            SizeArg::Vertical => ImageSize::Vertical,
        }
    }
}

impl From<StyleArg> for ImageStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Natural => ImageStyle::Natural,
            StyleArg::Vivid => ImageStyle::Vivid,
        }
    }
}

impl From<QualityArg> for ImageQuality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Standard => ImageQuality::Standard,
            QualityArg::Hd => ImageQuality::Hd,
        }
    }
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Url => ResponseFormat::Url,
            FormatArg::B64Json => ResponseFormat::B64Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Configuration is checked in full before anything touches the network.
    let config = match AzureConfig::from_env() {
        Ok(config) => config,
        Err(DalleError::MissingConfig(missing)) => {
            eprintln!("Error: one or more environment variables are missing:");
            for name in &missing {
                eprintln!("  {name}");
            }
            eprintln!("\nPlease set these in your environment or .env file.");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let request = match cli.prompt {
        Some(prompt) => ImageRequest::new(prompt)
            .with_size(cli.size.into())
            .with_style(cli.style.into())
            .with_quality(cli.quality.into())
            .with_response_format(cli.format.into()),
        None => collect_request()?,
    };

    let format = request.response_format;
    let client = AzureDalleClient::new(&config);
    let outcome = client.generate(&request).await;
    render_outcome(&outcome, format);

    Ok(())
}

/// Walks the user through the original sequential menu flow.
fn collect_request() -> io::Result<ImageRequest> {
    println!("=== Azure OpenAI DALL-E 3 ===");
    let prompt = ask("Enter an image prompt: ")?;

    println!("\nSelect image size:");
    println!("1) 1024x1024 (square, faster to generate)");
    println!("2) 1792x1024 (widescreen)");
    println!("3) 1024x1792 (vertical)");
    let size = ImageSize::from_choice(&ask("Enter your choice (1,2,3): ")?);

    println!("\nSelect style:");
    println!("1) natural (similar to the DALL-E 2 default)");
    println!("2) vivid (hyper-real, cinematic)");
    let style = ImageStyle::from_choice(&ask("Enter your choice (1 or 2): ")?);

    println!("\nSelect quality:");
    println!("1) standard (faster)");
    println!("2) hd (finely detailed, more consistent)");
    let quality = ImageQuality::from_choice(&ask("Enter your choice (1 or 2): ")?);

    println!("\nSelect response format:");
    println!("1) url (returns a URL to download the image)");
    println!("2) b64_json (returns a Base64-encoded string)");
    let format = ResponseFormat::from_choice(&ask("Enter your choice (1 or 2): ")?);

    Ok(ImageRequest::new(prompt)
        .with_size(size)
        .with_style(style)
        .with_quality(quality)
        .with_response_format(format))
}

/// Prints a label and reads one trimmed line from stdin.
fn ask(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Renders the outcome. The `url` field carries the Base64 payload when
/// `b64_json` was requested, so only the label changes with the format.
fn render_outcome(outcome: &GenerationOutcome, format: ResponseFormat) {
    match outcome {
        GenerationOutcome::Success { images, .. } if images.is_empty() => {
            println!("\nNo image data returned in the response.");
        }
        GenerationOutcome::Success { images, .. } => {
            println!("\n=== Image Generation Successful ===");
            for image in images {
                match format {
                    ResponseFormat::Url => println!("URL to generated image:"),
                    ResponseFormat::B64Json => println!("Base64 payload for generated image:"),
                }
                println!("{}", image.url);
                if let Some(revised) = &image.revised_prompt {
                    println!("Revised prompt:");
                    println!("{revised}");
                }
            }
        }
        GenerationOutcome::Failure { code, message } => {
            println!("\n=== Image Generation Failed ===");
            if let Some(code) = code {
                println!("Error code: {code}");
            }
            println!("{message}");
        }
    }
}
