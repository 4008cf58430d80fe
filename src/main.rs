use anyhow::Context;
use clap::Parser;
use route_picker::{
    sdk::config::RouterConfig,
    sdk::geo::GeoPoint,
    sdk::render::{JsonSurface, RenderSurface, TextSurface},
    sdk::routing::{CachingProvider, DirectionsProvider, OsrmProvider},
    sdk::session::SessionDriver,
    sdk::util::log::init_logging,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Pick two points and get a driving route with turn-by-turn directions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A map click as "lat,lng". Repeat for more clicks; without any,
    /// clicks are read from stdin one per line
    #[arg(short, long = "point", value_name = "LAT,LNG")]
    points: Vec<GeoPoint>,

    /// OSRM server root (overrides OSRM_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Reuse routes already fetched for the same ordered pair of points
    #[arg(long)]
    cache: bool,

    /// Print each view as a JSON line instead of text
    #[arg(long)]
    json: bool,

    /// Debug logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dotenvy::dotenv().ok();

    let mut config = RouterConfig::from_env()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }
    let osrm = OsrmProvider::new(&config).context("Failed to build HTTP client")?;
    log::info!("Using OSRM server at {}", osrm.base_url());
    let provider: Arc<dyn DirectionsProvider> = if cli.cache {
        Arc::new(CachingProvider::new(osrm))
    } else {
        Arc::new(osrm)
    };

    let (tx, rx) = mpsc::channel(16);
    if cli.points.is_empty() {
        log::info!("Reading clicks from stdin, one \"lat,lng\" per line");
        tokio::spawn(read_clicks(tx));
    } else {
        let points = cli.points;
        tokio::spawn(async move {
            for point in points {
                if tx.send(point).await.is_err() {
                    break;
                }
            }
        });
    }

    if cli.json {
        run(provider, JsonSurface::new(std::io::stdout()), rx).await;
    } else {
        run(provider, TextSurface::new(std::io::stdout()), rx).await;
    }
    Ok(())
}

async fn run<S: RenderSurface>(
    provider: Arc<dyn DirectionsProvider>,
    surface: S,
    clicks: mpsc::Receiver<GeoPoint>,
) {
    let mut driver = SessionDriver::new(provider, surface);
    driver.run(clicks).await;
}

async fn read_clicks(tx: mpsc::Sender<GeoPoint>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<GeoPoint>() {
            Ok(point) => {
                if tx.send(point).await.is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("Ignoring click: {}", e),
        }
    }
}
