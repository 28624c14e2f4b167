//! Portal entry point

use clap::Parser;
use tracing::debug;

use portal::{Args, Portal, PortalConfig, PortalResult, RealAdmissionsStore};
use shared::logging;

#[tokio::main]
async fn main() -> PortalResult<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let trace_endpoint = args
        .trace_ep
        .as_ref()
        .map(|url| logging::TracingEndpoint::new(url.clone()));
    logging::init_tracing_with_endpoint_and_level("portal", trace_endpoint, Some(&args.log_level));

    let config = PortalConfig::from_args(&args)?;
    logging::log_startup("admissions portal");
    debug!(
        store = %config.store_url,
        timeout_ms = ?config.store_timeout.map(|t| t.as_millis()),
        retries = config.retry.max_retries,
        "portal configuration"
    );

    let store = RealAdmissionsStore::new(config.store_url.clone(), config.store_timeout)?;
    let portal = Portal::new(&config, store);

    portal.run().await?;

    logging::log_success("Portal stopped gracefully");
    Ok(())
}
