//! Vyas report page preview
//!
//! Drives the report page against a live server from the command line and
//! writes the resulting floor map markup.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vyas_app::launch::{apply_room_link, load_floors, resolve_room_link};
use vyas_app::page::MapContainer;
use vyas_app::{PageController, Result};
use vyas_core::{FloorId, PageConfig};
use vyas_net::HttpClient;

#[derive(Debug, Parser)]
#[command(name = "vyas-preview", version, about = "Preview the room maintenance report page")]
struct Args {
    /// Page config file (defaults to page.toml in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Floor to open
    #[arg(long)]
    floor: Option<FloorId>,

    /// Room code to preselect, as in `?room=VY404`
    #[arg(long)]
    room: Option<String>,

    /// Write the map markup here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Vyas preview");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(args)) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PageConfig::load(path)?,
        None => load_default_config()?,
    };

    let client = Arc::new(HttpClient::new(&config.endpoints)?);
    let floors = load_floors(client.as_ref(), &config).await?;

    if let Some(raw) = &args.room {
        let room = resolve_room_link(client.as_ref(), raw, &config.layout).await?;
        apply_room_link(&mut config, &room);
    }
    if let Some(floor_id) = args.floor {
        config.preselected_floor = Some(floor_id);
    }

    let controller = PageController::new(client, config, floors);
    controller.start().await;

    let page = controller.snapshot();
    if let MapContainer::Failed { message, .. } = &page.map {
        tracing::warn!("{}", message);
    }
    let html = page.map.to_node().to_html();

    match &args.out {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "Wrote floor map");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", html)?;
        }
    }

    Ok(())
}

fn load_default_config() -> Result<PageConfig> {
    let Some(dirs) = ProjectDirs::from("in", "mitwpu", "vyas") else {
        tracing::debug!("No config directory; using defaults");
        return Ok(PageConfig::default());
    };
    load_config_or_default(&dirs.config_dir().join("page.toml"))
}

fn load_config_or_default(path: &Path) -> Result<PageConfig> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Loading page config");
        Ok(PageConfig::load(path)?)
    } else {
        Ok(PageConfig::default())
    }
}
