//! `serp-studio serve`: run the rewrite proxy until Ctrl-C.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::StudioConfig;
use crate::proxy::start_rewrite_proxy;

pub async fn handle_serve_command(config: &StudioConfig) -> color_eyre::Result<()> {
    if config.proxy.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; upstream requests will be unauthenticated");
    }

    let (handle, addr) =
        start_rewrite_proxy(Arc::new(ReqwestHttpClient::new()), config.proxy.clone()).await?;
    eprintln!("Rewrite proxy listening on http://{}", addr);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down rewrite proxy");
    handle.abort();
    Ok(())
}
