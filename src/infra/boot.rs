use crate::infra::config::Config;
use crate::infra::runtime::users::InMemoryUserDirectory;
use crate::infra::store::JsonFileStore;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Build the app selected by `cfg.mode`. Anything other than `login` serves sessions.
pub fn build_app(cfg: &Config) -> Router {
    if cfg.mode == "login" {
        crate::infra::http_app::build_login_app(Arc::new(InMemoryUserDirectory::default()))
    } else {
        let store = JsonFileStore::new(cfg.sessions_file.clone());
        crate::infra::http_app::build_sessions_app(Arc::new(store), &cfg.static_dir)
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        sessions_file = %cfg.sessions_file.display(),
        static_dir = %cfg.static_dir.display(),
        "BOOT classroom-sessions"
    );

    let app = build_app(&cfg);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Shutting down");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Signal received, starting graceful shutdown");
}
