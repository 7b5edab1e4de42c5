//! # CLI Behavior
//!
//! This is **one possible UI client** for gigbook. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Views as Commands
//!
//! - `gigbook browse` is the public directory: search, filter chips, sort
//!   and pagination map to flags. Running `gigbook` with no command browses.
//! - `gigbook onboard` is the artist onboarding form. Every field is
//!   validated at once; rejected fields are listed on stderr and the exit
//!   code is 1.
//! - `gigbook dashboard` is the reviewer's table, with `approve` and
//!   `remove` as its row actions.
//!
//! ## Data Directory
//!
//! Submissions, favorites and `config.json` live in `--data-dir`, else
//! `$GIGBOOK_HOME`, else the platform data directory.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: layout and template rendering
//! - `setup`: clap definitions and grouped help
//! - `styles`: the theme
//! - `templates`: embedded template files

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
pub use render::render_field_errors;
