use std::sync::Arc;

use tokio::net::TcpListener;

use refmirror_finder::MirrorFinder;
use refmirror_git::Pusher;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// The refmirror webhook server.
pub struct MirrorServer {
    state: AppState,
}

impl MirrorServer {
    pub fn new(
        config: ServerConfig,
        finder: Arc<dyn MirrorFinder>,
        pusher: Arc<dyn Pusher>,
    ) -> Self {
        Self {
            state: AppState {
                finder,
                pusher,
                config: Arc::new(config),
            },
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Bind and serve until the process ends.
    pub async fn serve(self) -> ServerResult<()> {
        let addr = self.state.config.bind_addr;
        let app = self.router();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("refmirror listening on {addr}");
        axum::serve(listener, app)
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))
    }
}
