//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::load_config;

pub async fn cmd_serve(
    config_path: Option<&Path>,
    host: &str,
    port: u16,
    origins: Vec<String>,
) -> Result<()> {
    let engine = load_config(config_path)?;

    println!("🚀 Starting fintwin web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Default horizon: {} months", engine.horizon);
    if origins.is_empty() {
        println!("   CORS: same-origin only (pass --origin to allow a frontend)");
    } else {
        println!("   CORS origins: {}", origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = fintwin_server::ServerConfig {
        allowed_origins: origins,
    };

    fintwin_server::serve(host, port, engine, config).await?;

    Ok(())
}
