use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use brandframe::api;
use brandframe::models::{self, AppConfig};
use brandframe::server;
use brandframe::services::PostInput;

#[derive(Parser)]
#[command(name = "brandframe")]
#[command(about = "Brand-colored frames for social media posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Compose a branded post directly to a PNG file
    Render {
        /// Main image file
        #[arg(short, long)]
        main: PathBuf,

        /// Company logo file
        #[arg(short, long)]
        logo: PathBuf,

        /// Target platform, e.g. "Instagram"
        #[arg(short, long)]
        platform: String,

        /// Content type, e.g. "Feed Image Posts" or "Instagram Stories"
        #[arg(short, long, default_value = "Feed Image Posts")]
        content_type: String,

        /// Short phrase burned into the main image
        #[arg(long)]
        overlay: Option<String>,

        /// Website printed in the caption strip
        #[arg(short, long)]
        website: Option<String>,

        /// Company id from the config file
        #[arg(long)]
        company: Option<String>,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Describe the colors of a logo
    Analyze {
        /// Logo image file
        #[arg(short, long)]
        logo: PathBuf,
    },
    /// List canonical canvas sizes
    Platforms,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brandframe API",
        description = "Brand-colored frames for social media posts",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_compose,
        api::handle_analyze,
        api::handle_platforms,
    ),
    components(schemas(
        models::ComposeRequest,
        models::AnalyzeRequest,
        models::LogoAnalysis,
        models::NamedColor,
        models::PlatformSize,
        api::ErrorResponse,
    )),
    tags(
        (name = "Compose", description = "Branded post composition"),
        (name = "Analyze", description = "Logo color analysis")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            main,
            logo,
            platform,
            content_type,
            overlay,
            website,
            company,
            output,
        }) => {
            init_cli_tracing();
            run_render_command(RenderArgs {
                main,
                logo,
                platform,
                content_type,
                overlay,
                website,
                company,
                output,
            })
            .await
        }
        Some(Commands::Analyze { logo }) => {
            init_cli_tracing();
            run_analyze_command(&logo).await
        }
        Some(Commands::Platforms) => {
            run_platforms_command();
            Ok(())
        }
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

struct RenderArgs {
    main: PathBuf,
    logo: PathBuf,
    platform: String,
    content_type: String,
    overlay: Option<String>,
    website: Option<String>,
    company: Option<String>,
    output: PathBuf,
}

/// Minimal logging for CLI
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandframe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_state() -> anyhow::Result<server::AppState> {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let fonts_dir = std::env::var("FONTS_DIR").ok().map(PathBuf::from);
    let config = AppConfig::load(config_file.as_deref());
    server::create_app_state(config, fonts_dir.as_deref())
}

/// Compose a branded post directly to a PNG file (no server needed)
async fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    let state = load_state()?;

    let main_bytes = std::fs::read(&args.main)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.main.display()))?;
    let logo_bytes = std::fs::read(&args.logo)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", args.logo.display()))?;

    let output = state
        .compose
        .compose(PostInput {
            main_bytes,
            logo_bytes,
            platform: args.platform,
            content_type: args.content_type,
            company_id: args.company,
            overlay_text: args.overlay,
            website: args.website,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    std::fs::write(&args.output, &output.png)?;
    println!(
        "Rendered {} ({}, {} bytes, brand {})",
        args.output.display(),
        output.canvas,
        output.png.len(),
        output.dominant
    );

    Ok(())
}

/// Print the color analysis of a logo file
async fn run_analyze_command(logo: &Path) -> anyhow::Result<()> {
    let state = load_state()?;
    let bytes = std::fs::read(logo)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", logo.display()))?;

    let analysis = state
        .analyzer
        .analyze(bytes)
        .await
        .map_err(|e| anyhow::anyhow!("Analysis error: {e}"))?;

    println!("{}\n", analysis.description);
    for color in &analysis.colors {
        println!(
            "  {}  {:>5.1}%  {}",
            color.hex, color.percentage, color.name
        );
    }
    if analysis.fallback {
        println!("\n(logo had too few opaque pixels; showing fallback colors)");
    }

    Ok(())
}

fn run_platforms_command() {
    println!("{:<12} {:<12} SIZE", "PLATFORM", "CONTENT");
    for size in api::canonical_sizes() {
        println!(
            "{:<12} {:<12} {}x{}",
            size.platform, size.content_type, size.width, size.height
        );
    }
    println!("\nAny other pair renders at 1200x1200.");
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();

    println!("Brandframe v{VERSION}");
    println!("Brand-colored frames for social media posts\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR   = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None if Path::new(models::config::DEFAULT_CONFIG_PATH).exists() => {
            models::config::DEFAULT_CONFIG_PATH.to_string()
        }
        None => "defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  brandframe serve      Start the HTTP server");
    println!("  brandframe render     Compose a branded post to a PNG file");
    println!("  brandframe analyze    Describe the colors of a logo");
    println!("  brandframe platforms  List canonical canvas sizes");
    println!("\nRun 'brandframe --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandframe=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let state = load_state()?;

    tracing::info!(
        companies = state.config.companies.len(),
        max_concurrent_builds = state.config.service.max_concurrent_builds,
        "Application state ready"
    );

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Brandframe server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
