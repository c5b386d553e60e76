//! VPN provisioning agent entry point.
//!
//! Initialises tracing, loads configuration from `OVPN_AGENT_*` environment
//! variables, wires the sacli adapter into the HTTP surface, and serves
//! over TLS when a certificate and key are configured.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum_server::tls_rustls::RustlsConfig;
use tracing_subscriber::EnvFilter;

use ovpn_agent::application::ports::AccessServer;
use ovpn_agent::infra::config::AgentConfig;
use ovpn_agent::infra::sacli::SacliCli;
use ovpn_agent::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("vpn provisioning agent starting");

    let config = Arc::new(AgentConfig::from_env()?);

    tracing::info!(
        listen_addr = %config.listen_addr,
        sacli_path = %config.sacli_path,
        admin_ui_url = %config.admin_ui_url,
        use_sudo = config.use_sudo,
        ip_restricted = !config.allowed_ip_list().is_empty(),
        tls_enabled = config.tls_cert.is_some(),
        "configuration loaded",
    );

    let access_server: Arc<dyn AccessServer> = Arc::new(SacliCli::from_config(&config));
    let app = server::router(AppState::new(Arc::clone(&config), access_server));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("invalid listen address")?;

    if let (Some(cert_path), Some(key_path)) = (&config.tls_cert, &config.tls_key) {
        tracing::info!("TLS enabled, loading cert from {cert_path}");
        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("failed to load TLS certificates")?;

        tracing::info!("agent ready at https://{}", config.listen_addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .context("HTTPS server error")?;
    } else {
        let listener = tokio::net::TcpListener::bind(&config.listen_addr)
            .await
            .context("failed to bind TCP listener")?;

        tracing::info!(
            "agent ready at http://{} (TLS disabled)",
            config.listen_addr,
        );

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    }

    tracing::info!("vpn provisioning agent shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        return;
    }
    tracing::info!("received shutdown signal");
}
