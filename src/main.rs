use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use neurovision::config::{self, API_URL_ENV};
use neurovision::{DetectionModel, PredictClient, Session, Settings, UploadedImage};

#[derive(Parser)]
#[command(name = "neurovision")]
#[command(about = "Upload MRI scans to a tumor classification service and view the results")]
struct Cli {
    /// Base URL of the inference service
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop interface (default)
    Gui,

    /// Analyze one image without the interface
    Detect {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Detection model: vgg16 or yolo
        #[arg(short, long, default_value = "vgg16")]
        model: DetectionModel,

        /// Write result images to this directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// List the models advertised by the service
    Models,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let settings = Settings::new(args.api_url, args.verbose);
    config::init_logging(&settings);

    match args.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(&settings),
        Command::Detect {
            image_path,
            model,
            out,
        } => runtime()?.block_on(detect(&settings, image_path, model, out)),
        Command::Models => runtime()?.block_on(models(&settings)),
    }
}

#[cfg(feature = "gui")]
fn run_gui(settings: &Settings) -> anyhow::Result<()> {
    neurovision::gui::run(settings)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_settings: &Settings) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use `detect` or `models`")
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

async fn detect(
    settings: &Settings,
    image_path: PathBuf,
    model: DetectionModel,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    if !model.is_available() {
        anyhow::bail!("{} is not available yet", model.wire_name());
    }

    let client = PredictClient::new(&settings.api_url)?;
    let image = UploadedImage::load(&image_path).await?;
    info!("Image loaded: {} ({})", image.file_name, image.data_url.mime());

    let mut session = Session::new();
    session.select_model(model);
    session.load_image(image);
    neurovision::analyze(&client, &mut session).await;

    let (Some(result), Some(image)) = (session.result(), session.image()) else {
        anyhow::bail!("Detection failed, see log for details");
    };

    println!("\n=== {} Detection Results ===", result.model.wire_name());
    println!("Confidence Score: {}", result.confidence_label());
    println!("Finding: {}", result.finding());
    for (i, bbox) in result.boxes().iter().enumerate() {
        println!(
            "  Region {} at ({:.2}, {:.2}) size {:.2}x{:.2}",
            i + 1,
            bbox.x,
            bbox.y,
            bbox.width,
            bbox.height
        );
    }

    if let Some(out_dir) = out {
        for path in neurovision::render::export(result, image, &out_dir)? {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

async fn models(settings: &Settings) -> anyhow::Result<()> {
    let client = PredictClient::new(&settings.api_url)?;
    let models = client.models().await?;

    println!("\n=== Models at {} ===", client.base_url());
    for model in models {
        let status = if model.available { "available" } else { "unavailable" };
        println!("  {} ({}) - {}", model.name, status, model.description);
    }
    Ok(())
}
