//! # Atlas TUI
//!
//! A terminal explorer for the countries of the world, backed by the
//! REST Countries API.
//!
//! ## Features
//! - Card grid of every country, sorted by name
//! - Live search by name and a region filter
//! - Detail page with currencies, languages and navigable border countries
//! - Light/dark theme, remembered between sessions
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod error;
pub mod filter;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod text;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, Page};
pub use error::FetchError;
pub use filter::{apply as apply_filter, FilterState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Country, Theme};
pub use network::{CountryClient, NetworkActor};
pub use storage::Storage;
