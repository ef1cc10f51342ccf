//! Client core for the Nestling parenting app.
//!
//! Three layers, wired together by the embedding application:
//!
//! - [`api`]: HTTP plumbing ([`ApiClient`]) and error normalization ([`ApiError`])
//! - [`services`]: one typed wrapper per backend entity
//! - [`state`]: one slice per entity, aggregated into [`AppState`]
//!
//! The UI owns an [`AppState`] and a [`services::Services`] bundle, and drives
//! slice operations with `&mut` access; slices never reach for global state.

pub mod api;
pub mod services;
pub mod state;

pub use api::{ApiClient, ApiError, ClientConfig};
pub use services::Services;
pub use state::AppState;
