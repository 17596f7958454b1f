//! CLI command implementations

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use clap::Subcommand;
use sedir_core::tracing_setup::{CliLogLevel, init_tracing};
use sedir_core::{HOMEPAGE_PATH, HomepageController, RecordingNavigator, SharedConfig, SiteConfig};
use sedir_search::{DirectorySearchService, GazetteerGeocoder, Geocoder};
use sedir_web::{AppState, run_server};
use tracing::info;

const DEMO_API_ROOT: &str = "demo";

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides the configuration)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Root URL of the search API
        #[arg(long)]
        api_root: Option<String>,
        /// Search the built-in demo directory instead of the API
        #[arg(long)]
        demo: bool,
        /// Console log level
        #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
        log_level: CliLogLevel,
        /// Directory for the last-run log file
        #[arg(long)]
        logs_dir: Option<PathBuf>,
    },
    /// Print the shareable homepage URL for a search
    Link {
        /// Search text
        #[arg(long)]
        q: Option<String>,
        /// Location or postal code
        #[arg(long)]
        near: Option<String>,
        /// Latitude, instead of resolving `--near`
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude, instead of resolving `--near`
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// JSON configuration file with known places
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            config,
            api_root,
            demo,
            log_level,
            logs_dir,
        } => {
            init_tracing(log_level.as_tracing_level(), logs_dir.as_deref())
                .context("failed to initialize logging")?;
            serve(host, port, config, api_root, demo).await
        }
        Commands::Link {
            q,
            near,
            lat,
            lon,
            config,
        } => {
            let coords = lat.zip(lon).map(|(lat, lon)| [lat, lon]);
            println!("{}", link(q, near, coords, config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    let config = match path {
        Some(path) => SiteConfig::load(&path)
            .map_err(|e| anyhow!("loading {}: {}", path.display(), e.user_message()))?,
        None => SiteConfig::default(),
    };
    Ok(config.with_env_overrides().with_default_places())
}

/// Start the web server
///
/// # Errors
/// - Configuration could not be loaded
/// - The search client could not be built
/// - The server failed to bind or serve
pub async fn serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
    api_root: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(root) = api_root {
        config.api.api_root = Some(root);
    }
    // Results are gated on an API root; the demo provider ignores its value.
    if demo && config.api.api_root.is_none() {
        config.api.api_root = Some(DEMO_API_ROOT.to_string());
    }

    let ip: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid host address '{}'", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);

    let search_service = if demo {
        info!("Using the built-in demo directory");
        DirectorySearchService::demo()
    } else {
        DirectorySearchService::api(Duration::from_secs(config.api.timeout_secs))?
    };

    let state = AppState::new(SharedConfig::new(config), search_service);
    run_server(state, addr).await?;
    Ok(())
}

/// Builds the homepage URL a search form submission would navigate to.
///
/// # Errors
/// - Configuration could not be loaded
/// - `--near` names an unknown place and no coordinates were given
pub fn link(
    q: Option<String>,
    near: Option<String>,
    coords: Option<[f64; 2]>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<String> {
    let config = load_config(config_path)?;
    let coords = match (coords, near.as_deref()) {
        (Some(coords), _) => Some(coords),
        (None, Some(near)) => {
            let geocoder = GazetteerGeocoder::from_places(&config.places);
            match geocoder.resolve(near) {
                Some(coords) => Some(coords),
                None => bail!("unknown location '{near}'"),
            }
        }
        (None, None) => None,
    };

    let mut controller = HomepageController::new(&config, RecordingNavigator::new());
    controller.on_search_submitted(q.as_deref(), near.as_deref(), coords);

    let (_, navigator) = controller.into_parts();
    let url = navigator
        .into_last()
        .map_or_else(|| HOMEPAGE_PATH.to_string(), |target| target.to_url());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_with_text() {
        assert_eq!(link(Some("bakery".into()), None, None, None).unwrap(), "/?q=bakery");
    }

    #[test]
    fn test_link_resolves_default_place() {
        let url = link(None, Some("Ottawa".into()), None, None).unwrap();
        assert_eq!(url, "/?at=45.4215%2C-75.6972&near=Ottawa");
    }

    #[test]
    fn test_link_with_explicit_coordinates() {
        let url = link(Some("bikes".into()), Some("home".into()), Some([45.0, -75.5]), None).unwrap();
        assert_eq!(url, "/?q=bikes&at=45%2C-75.5&near=home");
    }

    #[test]
    fn test_link_unknown_place() {
        assert!(link(None, Some("Atlantis".into()), None, None).is_err());
    }
}
