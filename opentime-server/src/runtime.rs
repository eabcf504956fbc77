use std::future::Future;
use std::net::SocketAddr;

use opentime_core::{SystemClock, WindowRegistry};
use tokio::net::TcpListener;

use crate::error::ServerError;
use crate::routes::{build_router, HEALTH_PATH, OPEN_TIME_PATH};
use crate::settings::{LogFormat, ServerSettings};
use crate::state::AppState;

/// Start the server and block the current thread until it exits.
pub fn start_blocking(settings: ServerSettings, registry: WindowRegistry) -> Result<(), ServerError> {
    init_tracing(settings.log_format);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;
    runtime.block_on(run(settings, registry))
}

/// Bind `settings.bind` and serve against the system clock until ctrl-c.
pub async fn run(settings: ServerSettings, registry: WindowRegistry) -> Result<(), ServerError> {
    let listener = TcpListener::bind(settings.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: settings.bind,
            source,
        })?;
    let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: settings.bind,
        source,
    })?;
    log_startup(local_addr, &registry);

    serve(listener, AppState::new(registry, SystemClock), shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;
    tracing::info!("server stopped");
    Ok(())
}

fn log_startup(addr: SocketAddr, registry: &WindowRegistry) {
    tracing::info!(%addr, windows = registry.len(), "open-time server listening");
    for path in [
        format!("{OPEN_TIME_PATH}/:parameter"),
        OPEN_TIME_PATH.to_string(),
        HEALTH_PATH.to_string(),
    ] {
        tracing::info!(method = "GET", %path, "endpoint");
    }
    for window in registry.iter() {
        let def = window.definition();
        tracing::info!(
            id = %def.id,
            title = %def.title,
            start = %def.start_time,
            end = %def.end_time,
            "window registered"
        );
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down server"),
        Err(err) => {
            tracing::error!(error = %err, "ctrl-c handler failed; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = match format {
        LogFormat::Text => fmt().with_env_filter(filter).with_target(false).try_init(),
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
    };
}
