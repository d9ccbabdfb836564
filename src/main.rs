use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use contrast_palette::Color;
use inkpal::api;
use inkpal::models::AppConfig;
use inkpal::server;
use inkpal::services::{Enrichment, PaletteRequest, PaletteService};

#[derive(Parser)]
#[command(name = "inkpal")]
#[command(about = "Accessible color palettes with guaranteed text contrast")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette and its contrast colors
    Generate {
        /// Target WCAG contrast ratio (1 to 21, default from config)
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Number of palette colors, kept colors included
        #[arg(short, long)]
        count: Option<usize>,

        /// Color to keep (#RRGGBB), may be repeated
        #[arg(short, long)]
        keep: Vec<String>,

        /// Seed for a reproducible palette
        #[arg(short, long)]
        seed: Option<u64>,

        /// Look up color names
        #[arg(long)]
        names: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Describe a single color
    Inspect {
        /// Color as #RRGGBB
        hex: String,

        /// Look up the color name
        #[arg(long)]
        names: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkpal API",
        description = "Accessible color palettes with guaranteed text contrast",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_palette, api::handle_color),
    components(schemas(
        api::PaletteResponse,
        api::ColorResponse,
        api::ColorDto,
        api::RangeDto,
        Enrichment,
    )),
    tags(
        (name = "Palette", description = "Palette generation and color inspection")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            ratio,
            count,
            keep,
            seed,
            names,
            json,
        }) => {
            init_cli_tracing();
            let request = PaletteRequest {
                ratio,
                count,
                keep,
                seed,
                names,
            };
            tokio::task::spawn_blocking(move || run_generate_command(request, json)).await?
        }
        Some(Commands::Inspect { hex, names, json }) => {
            init_cli_tracing();
            tokio::task::spawn_blocking(move || run_inspect_command(&hex, names, json)).await?
        }
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpal=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Generate a palette and print it
fn run_generate_command(request: PaletteRequest, json: bool) -> anyhow::Result<()> {
    let service = PaletteService::new(Arc::new(AppConfig::from_env()));
    let outcome = service.generate(&request)?;

    if json {
        let response = api::PaletteResponse::from_outcome(&outcome);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let palette = &outcome.palette;
    let range = palette.unachievable_range();
    println!("Target contrast ratio: {}", palette.target_ratio());
    if range.is_empty() {
        println!("Unachievable luminance: none");
    } else {
        println!(
            "Unachievable luminance: {:.4} - {:.4}",
            range.min, range.max
        );
    }

    println!("\nColors:");
    for color in palette.colors() {
        print_color_row(color);
    }
    println!("\nContrast colors:");
    for color in palette.contrasts() {
        print_color_row(color);
    }

    if let Some(Enrichment::NotEnriched { reason }) = &outcome.naming {
        eprintln!("\nColor names unavailable: {reason}");
    }

    Ok(())
}

fn print_color_row(color: &Color) {
    let rgb = color.rgb();
    println!(
        "  {}  rgb({:>3}, {:>3}, {:>3})  L={:.4}  ink={:<5}  {}",
        color.hex(),
        rgb.r,
        rgb.g,
        rgb.b,
        color.luminance(),
        color.ink(),
        color.name().unwrap_or("")
    );
}

/// Describe a single color
fn run_inspect_command(hex: &str, names: bool, json: bool) -> anyhow::Result<()> {
    let service = PaletteService::new(Arc::new(AppConfig::from_env()));
    let outcome = service.inspect(hex, names)?;
    let response = api::ColorResponse::from(&outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let color = &response.color;
    println!("{}", outcome.color);
    println!("  rgb:       {:?}", color.rgb);
    println!(
        "  hsl:       {:.4}, {:.4}, {:.4}",
        color.hsl[0], color.hsl[1], color.hsl[2]
    );
    println!("  luminance: {:.4}", color.luminance);
    println!("  ink:       {}", color.ink);
    println!("  vs black:  {:.2}:1", response.contrast_with_black);
    println!("  vs white:  {:.2}:1", response.contrast_with_white);

    if let Some(Enrichment::NotEnriched { reason }) = &outcome.naming {
        eprintln!("\nColor name unavailable: {reason}");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Inkpal v{VERSION}");
    println!("Accessible color palettes with guaranteed text contrast\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if std::path::Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  inkpal generate   Generate a palette");
    println!("  inkpal inspect    Describe a single color");
    println!("  inkpal serve      Start the HTTP server");
    println!("\nRun 'inkpal --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    tracing::info!(
        target_ratio = config.target_ratio,
        colors = config.colors,
        naming = config.naming.enabled,
        "Configuration loaded"
    );

    let state = server::create_app_state(config);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Inkpal server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
