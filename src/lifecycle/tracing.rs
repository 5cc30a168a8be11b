//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the service.
//!
//! ## Configuration
//!
//! - The filter comes from `RUST_LOG` when set, otherwise from `logging.level`.
//! - Text output is compact and hides the module prefix (`with_target(false)`).
//! - `logging.json: true` switches to one JSON object per line for log shippers.
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # Full payloads at client entry points
//! RUST_LOG=debug cargo run
//!
//! # Only the orchestration layer
//! RUST_LOG=accounts_service::orders=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Remote calls**: one `Remote call finished` line per orchestrator call, with
//!   `operation` and `outcome`, inside a span carrying `order_id`.
//! - **Store operations**: `Created`, `Updated`, `Deleted`, `Not found` with the record key.
//! - **Notifications**: queueing, delivery and dropped events.
//!
//! With `RUST_LOG=info` a successful create looks like:
//!
//! ```text
//! INFO create{receiver_email="jane@example.com" order_id=9f0c…}: Remote call finished operation=create outcome=success
//! INFO create{receiver_email="jane@example.com" order_id=9f0c…}: Order placed notification queued
//! INFO Notification delivered to=jane@example.com order_id=9f0c… message=Order status is updated to PLACED state
//! ```

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub fn setup_tracing(config: &LoggingConfig) -> Result<(), TracingInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
}
