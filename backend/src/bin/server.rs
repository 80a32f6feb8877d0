//! Timeline HTTP Server Binary
//!
//! This is the main entry point for the timeline layout REST API server.
//! It loads the layout configuration, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timeline-server
//!
//! # With an explicit configuration file
//! TIMELINE_CONFIG=/etc/timeline/timeline.toml cargo run --bin timeline-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TIMELINE_CONFIG`: Path to a `timeline.toml` (default: search standard locations)
//! - `RUST_LOG`: Log filter directives, e.g. `transit_timeline=debug` (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transit_timeline::config::TimelineConfig;
use transit_timeline::http::{create_router, AppState};

/// Build the log filter from `RUST_LOG` directives, falling back to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting timeline HTTP server");

    let config = TimelineConfig::load()?;
    info!(
        axis_width_px = config.layout.axis_width_px,
        min_width_px = config.layout.min_width_px,
        utc_offset_minutes = config.layout.zone.offset_minutes(),
        "Layout configuration loaded"
    );

    let app = create_router(AppState::new(config));

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
