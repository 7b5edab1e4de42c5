//! # Gigbook Architecture
//!
//! Gigbook is an **artist directory and onboarding library** for event
//! booking. Organisers browse performers; performers submit a profile; a
//! reviewer approves or removes submissions from a dashboard. The library is
//! UI-agnostic and ships with a command-line client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, sets exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, supplies config, owns the submission gate   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Directory, onboarding, dashboard, favorites              │
//! │  - Built on directory/ (filter, sort, paginate) and         │
//! │    validation.rs                                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer                                                 │
//! │  - source.rs: DataSource trait, MockDirectory feed          │
//! │  - store/: ArtistRepository, FileRepository, InMemory       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process. Diagnostics go through `tracing`; installing a subscriber is
//! the binary's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`directory`]: Filter, sort and pagination pipeline
//! - [`validation`]: Onboarding form rules and the submission gate
//! - [`source`]: Directory feed abstraction and the seeded mock
//! - [`store`]: Persistence of submissions and favorites
//! - [`model`]: `Artist`, `FeeRange`, `Category`, `Location`
//! - [`config`]: Settings stored in the data directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod source;
pub mod store;
pub mod validation;
