//! Pings the echo endpoint once and prints the pong.

use qplan_web::client::run_ping;
use qplan_web::config::ClientConfig;
use qplan_web::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow::anyhow!(e))?;
    let config = ClientConfig::from_env();

    run_ping(&config.ws_url).await?;
    Ok(())
}
