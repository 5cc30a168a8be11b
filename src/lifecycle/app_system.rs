use crate::clients::AccountClient;
use crate::config::AppConfig;
use crate::http::{self, AppState};
use crate::notify::{self, LogMailer, Mailer};
use crate::orders::{HttpOrderBackend, OrderBackend, OrderOrchestrator};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to build orders HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

/// Runtime wiring for the service.
///
/// `AppSystem` is responsible for:
/// - **Lifecycle Management**: starting the account actor and the notification dispatcher,
///   and stopping them again
/// - **Dependency Wiring**: handing the orders backend and the notification queue to the
///   orchestrator
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new(&config)?;
/// let app = system.router();
/// // ... serve `app`, then drop it ...
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    pub orchestrator: OrderOrchestrator,
    pub account_client: AccountClient,
    cancel: CancellationToken,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    /// Builds the system against the orders service named in `config`.
    pub fn new(config: &AppConfig) -> Result<Self, SystemError> {
        let backend = HttpOrderBackend::new(
            &config.orders_backend.base_url,
            config.orders_backend.timeout(),
        )?;
        info!(base_url = backend.base_url(), "Orders backend configured");
        Ok(Self::with_backend(config, Arc::new(backend), Arc::new(LogMailer)))
    }

    /// Builds the system around explicit collaborators. Must be called inside a Tokio runtime.
    pub fn with_backend(
        config: &AppConfig,
        backend: Arc<dyn OrderBackend>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let cancel = CancellationToken::new();

        let (account_actor, account_client) =
            crate::account_actor::new(config.accounts.mailbox_capacity);
        let (producer, dispatcher) = notify::new(config.notifications.queue_capacity, mailer);

        let account_handle = tokio::spawn(account_actor.run());
        let dispatcher_handle = tokio::spawn(dispatcher.run(cancel.child_token()));

        let orchestrator = OrderOrchestrator::new(
            backend,
            Arc::new(producer),
            config.orders_backend.timeout(),
        )
        .with_cancellation(cancel.child_token());

        Self {
            orchestrator,
            account_client,
            cancel,
            handles: vec![account_handle, dispatcher_handle],
        }
    }

    pub fn router(&self) -> Router {
        http::router(AppState {
            orchestrator: self.orchestrator.clone(),
            accounts: self.account_client.clone(),
        })
    }

    /// Binds `address`, serves until `signal` resolves, then shuts the system down.
    pub async fn serve(
        self,
        address: &str,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), SystemError> {
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|source| SystemError::Bind {
                address: address.to_string(),
                source,
            })?;
        info!(address, "Listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await
            .map_err(SystemError::Serve)?;

        self.shutdown().await
    }

    /// Stops the system.
    ///
    /// Cancels outstanding orchestrator calls, lets the dispatcher flush queued events, drops
    /// the account client so the store actor exits, and waits for both tasks. Routers built
    /// with [`router`](Self::router) hold account clients too and must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        self.cancel.cancel();
        drop(self.orchestrator);
        drop(self.account_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Background task failed");
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
