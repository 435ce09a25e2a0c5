mod error;
mod handler;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use swiftbuild_server::{RateLimiter, SiteError, SiteParts, SiteServer};
use tokio::task::JoinHandle;

/// Re-export the core crate for convenience
pub use swiftbuild_server;

pub type ServeError = Box<dyn std::error::Error + Send + Sync>;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, SiteError>;
  fn serve(self, addr: &str) -> impl Future<Output = Result<(), ServeError>> + Send;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    Ok(router(self.into_parts()?))
  }

  async fn serve(self, addr: &str) -> Result<(), ServeError> {
    serve_parts(self.into_parts()?, addr, shutdown_signal()).await
  }
}

pub fn router(parts: SiteParts) -> axum::Router {
  handler::build_router(parts)
}

const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Evict expired rate-limit records every `interval` (at least one second)
/// until aborted.
pub fn spawn_sweeper(limiter: Arc<dyn RateLimiter>, interval: Duration) -> JoinHandle<()> {
  tokio::spawn(async move {
    let mut ticker = tokio::time::interval(interval.max(MIN_SWEEP_INTERVAL));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // first tick completes immediately
    ticker.tick().await;
    loop {
      ticker.tick().await;
      let removed = limiter.sweep();
      if removed > 0 {
        tracing::debug!(removed, "swept expired rate-limit records");
      }
    }
  })
}

/// Bind, serve until `shutdown` resolves, then stop the sweeper.
pub async fn serve_parts(
  parts: SiteParts,
  addr: &str,
  shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServeError> {
  let sweeper = spawn_sweeper(parts.contact.limiter().clone(), parts.sweep_interval);
  let app = router(parts);
  let listener = tokio::net::TcpListener::bind(addr).await?;
  let local_addr = listener.local_addr()?;
  tracing::info!(%local_addr, "site server listening");
  let result = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;
  sweeper.abort();
  tracing::info!("site server stopped");
  result?;
  Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
  #[cfg(unix)]
  {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        tokio::select! {
          _ = sigterm.recv() => {}
          _ = tokio::signal::ctrl_c() => {}
        }
      }
      Err(e) => {
        tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl-C only");
        let _ = tokio::signal::ctrl_c().await;
      }
    }
  }
  #[cfg(not(unix))]
  {
    let _ = tokio::signal::ctrl_c().await;
  }
}
