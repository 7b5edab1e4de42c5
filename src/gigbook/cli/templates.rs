//! Output templates, embedded at compile time.
//!
//! Templates are minijinja (through `outstanding`). Line breaks are explicit:
//! block tags trim the newline after them with `-%}` and each output line ends
//! with its own newline. Column widths and truncation are computed in
//! `render.rs`; templates only pick styles.

pub const DIRECTORY_TEMPLATE: &str = include_str!("templates/directory.tmp");
pub const ARTIST_TEMPLATE: &str = include_str!("templates/artist.tmp");
pub const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FIELD_ERRORS_TEMPLATE: &str = include_str!("templates/field_errors.tmp");
