//! XSS Training Lab server.
//!
//! Three reflected-XSS exercises behind one router:
//! - /easy   — no filtering, no escaping
//! - /medium — weak `<script>` blacklist, still unescaped
//! - /hard   — full entity encoding

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use xsslab_server::{config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // The lab must run with zero setup, so a missing or broken config file
    // falls back to defaults instead of aborting.
    let cfg = match config::load_from_file("xsslab.yaml") {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(%err, "config not loaded, using defaults");
            config::LabConfig::default()
        }
    };

    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let app = router::build_router();

    tracing::info!(%listen, "xsslab-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
