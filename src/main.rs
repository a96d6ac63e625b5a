use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower::ServiceExt;
use tracing::Level;

use undertone::{
    AppError, ClassificationService, QuizRequest, Settings, UndertoneEngine, UserInput, VeinColor,
};

/// Classify skin undertone and colour season from a photo.
#[derive(Parser, Debug)]
#[command(name = "undertone", version)]
struct Args {
    /// Photo to analyse (any format the `image` crate can decode)
    image: PathBuf,

    /// Vein colour on the inner wrist: green, blue, blue-green, purple or unsure
    #[arg(long)]
    vein: Option<VeinColor>,

    /// TOML file overriding fusion weights and thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log per-stage diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref())?;
    let engine = Arc::new(UndertoneEngine::new(settings.fusion));

    let image = image::open(&args.image)?.to_rgba8();
    tracing::info!(
        "Loaded {} ({}x{})",
        args.image.display(),
        image.width(),
        image.height()
    );

    let mut request = QuizRequest::new(image);
    if let Some(vein) = args.vein {
        request = request.with_user(UserInput::with_vein_color(vein));
    }

    let report = ClassificationService::new(engine).oneshot(request).await?;
    tracing::info!(
        "Undertone {} ({:?} confidence), season {}",
        report.classification.undertone,
        report.classification.confidence,
        report.season
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
