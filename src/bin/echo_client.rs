//! Sends one text message to the echo endpoint and prints the reply.

use qplan_web::client::run_echo;
use qplan_web::config::ClientConfig;
use qplan_web::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow::anyhow!(e))?;
    let config = ClientConfig::from_env();

    run_echo(&config.ws_url, &config.echo_payload).await?;
    Ok(())
}
