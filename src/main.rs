use algoart::{
    logger::{self, LogLevel, LoggerConfig},
    EngineConfig, GeneratedImage, ImageEngine,
};
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(name = "algoart", version, about = "Generate ASCII, SVG and pixel art from code")]
struct Cli {
    /// Log dispatch and timing details
    #[arg(short, long)]
    verbose: bool,

    /// Print the whole artifact as JSON instead of just its data
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render one image from a kind and a JSON parameter bag
    Generate {
        /// ascii, svg or pixel
        kind: String,
        /// e.g. '{"style":"shape","shape":"diamond","size":7}'
        #[arg(default_value = "{}")]
        params: String,
    },
    /// Render the identicon for an agent name
    Avatar { name: String },
    /// List every routable style
    Styles,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_file_loaded = dotenv::dotenv().is_ok();
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    logger::init_with_config(LoggerConfig::development().with_level(level))?;
    if !env_file_loaded {
        log::debug!("No .env file found, using process environment");
    }

    let config = EngineConfig::from_env();
    logger::log_engine_config(&config);
    let engine = ImageEngine::new(config);

    match cli.command {
        Some(Command::Generate { kind, params }) => {
            let params: serde_json::Value = serde_json::from_str(&params)?;
            let image = engine.generate(&kind, params)?;
            print_image(&image, cli.json)?;
        }
        Some(Command::Avatar { name }) => {
            let image = engine.avatar(&name)?;
            print_image(&image, cli.json)?;
        }
        Some(Command::Styles) => print_styles(),
        None => showcase(&engine, cli.json)?,
    }

    Ok(())
}

fn print_image(image: &GeneratedImage, as_json: bool) -> algoart::Result<()> {
    if as_json {
        println!("{}", image.to_json()?);
    } else {
        println!("{}", image.data());
    }
    Ok(())
}

fn print_styles() {
    let mut current = None;
    for (kind, style, description) in ImageEngine::supported_styles() {
        if current != Some(kind) {
            println!("{} ({}):", kind, kind.discriminator_key());
            current = Some(kind);
        }
        println!("  {:<10} {}", style, description);
    }
}

fn showcase(engine: &ImageEngine, as_json: bool) -> algoart::Result<()> {
    log::info!("🎨 Rendering showcase");

    let requests = [
        (
            "ascii",
            json!({"style": "border", "text": "Hello!\nfrom algoart", "borderStyle": "fancy"}),
        ),
        ("ascii", json!({"style": "textArt", "text": "gm agents"})),
        ("ascii", json!({"style": "shape", "shape": "diamond", "size": 9})),
        (
            "svg",
            json!({"type": "gradient", "colors": ["#ff6b6b", "#ffd93d"], "width": 400, "height": 300}),
        ),
        ("svg", json!({"type": "avatar", "agentName": "clawdbot"})),
        (
            "pixel",
            json!({"type": "16x16", "style": "checker", "colors": ["#1f1f2e", "#fce877"]}),
        ),
        ("unknown", json!({})),
    ];

    for (kind, params) in requests {
        match engine.generate(kind, params) {
            Ok(image) => {
                println!("--- {} ---", image.kind());
                print_image(&image, as_json)?;
            }
            Err(e) => log::error!("❌ {} failed: {}", kind, e),
        }
    }
    Ok(())
}
