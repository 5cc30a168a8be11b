//! # Accounts Service
//!
//! > **An accounts backend that delegates orders to a remote service.**
//!
//! The service keeps customer accounts in a local actor-owned store and forwards every order
//! request to a separate orders service over HTTP. Whatever the remote does (succeeds, rejects
//! the request, times out, answers garbage) the caller gets back one of a fixed set of
//! status/message pairs.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. One remote call, one classified outcome
//! Every orchestrator method issues exactly one call through the [`OrderBackend`](orders::OrderBackend)
//! port. The backend returns an [`OperationOutcome`](orders::OperationOutcome): `Success`,
//! `KnownFailure(kind)` or `UnknownFailure`. Raw transport errors never leave the backend.
//!
//! ### 2. Static response tables
//! [`orders::translator`] holds one row per operation. An operation only answers with a
//! dedicated message for the failure kinds its row lists; anything else becomes that
//! operation's internal-error response.
//!
//! ### 3. Fire-and-forget notifications
//! A successful create pushes a [`NotificationEvent`](model::NotificationEvent) into a bounded
//! queue without waiting. A full or closed queue is logged and ignored; the create still
//! succeeds.
//!
//! ### 4. Actor-owned accounts
//! Accounts live in a [`record_actor::RecordActor`]: one task owns the map, requests arrive
//! over a channel, so no locks are needed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`orders`])
//! - **Role**: Calls the orders service, classifies the result, maps it to a [`Response`](model::Response).
//! - **Key items**: [`OrderOrchestrator`](orders::OrderOrchestrator), [`HttpOrderBackend`](orders::HttpOrderBackend).
//!
//! ### 2. Notifications ([`notify`])
//! - **Role**: Bounded queue plus dispatcher task in front of a [`Mailer`](notify::Mailer).
//!
//! ### 3. Accounts ([`account_actor`], [`clients`])
//! - **Role**: The `Record` implementation for accounts and the typed
//!   [`AccountClient`](clients::AccountClient) that hides store errors.
//!
//! ### 4. The Edge ([`http`])
//! - **Role**: axum handlers for `/api/orders/*`, `/api/accounts/*` and `/health`.
//!
//! ### 5. The Wiring ([`lifecycle`], [`config`])
//! - **Role**: Loads configuration, installs tracing, spawns background tasks and shuts them down.
//! - **Key items**: [`AppSystem`](lifecycle::AppSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 6. Testing ([`mock`])
//! - [`MockOrderBackend`](mock::MockOrderBackend) and [`RecordingNotifier`](mock::RecordingNotifier)
//!   drive the orchestrator without a network.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Defaults: listen on 0.0.0.0:8080, orders service at http://localhost:8083
//! RUST_LOG=info cargo run
//!
//! # Explicit config file and backend
//! ACCOUNTS_CONFIG=config/default.yaml ORDERS_BASE_URL=http://orders:8083 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod account_actor;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod notify;
pub mod orders;
