//! Styles for the gigbook CLI.
//!
//! Templates only ever refer to the semantic names in [`names`]; the colors
//! behind them live in [`GIGBOOK_THEME`].

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TIME: &str = "time";
    pub const LIST_INDEX: &str = "list-index";
    pub const FEE: &str = "fee";
    pub const RATING: &str = "rating";
    pub const CURRENT_PAGE: &str = "current-page";
    pub const UNAVAILABLE: &str = "unavailable";
}

pub static GIGBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    let accent = Style::new().color256(rgb_to_ansi256((196, 140, 0)));

    Theme::new()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TIME, muted.clone().italic())
        .add(names::LIST_INDEX, accent.clone())
        .add(names::FEE, Style::new().cyan())
        .add(names::RATING, accent.bold())
        .add(names::CURRENT_PAGE, Style::new().black().on_yellow().bold())
        .add(names::UNAVAILABLE, muted.strikethrough())
});
