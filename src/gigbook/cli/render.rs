//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate.
//!
//! Layout (column widths, truncation, padding) is computed here because it
//! needs Unicode-aware width handling. Templates receive ready-made strings
//! plus the name of the style to apply.

use super::styles::{names, GIGBOOK_THEME};
use super::templates::{
    ARTIST_TEMPLATE, DASHBOARD_TEMPLATE, DIRECTORY_TEMPLATE, FIELD_ERRORS_TEMPLATE,
    MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use gigbook::api::{CmdMessage, DashboardStats, MessageLevel};
use gigbook::config::GigbookConfig;
use gigbook::directory::{DirectoryPage, FilterState, PageButton};
use gigbook::model::{Artist, Category, Location};
use gigbook::validation::FieldErrors;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const FEE_WIDTH: usize = 22;
const DETAIL_INDENT: usize = 6;

const NO_ARTISTS: &str =
    "No artists found. Try adjusting your filters or search terms to find more artists.";

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let theme = ThemeChoice::from(&*GIGBOOK_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct DirectoryRow {
    index: String,
    name: String,
    name_style: &'static str,
    padding: String,
    fee: String,
    indent: String,
    details: String,
    rating: String,
}

#[derive(Serialize)]
struct PagerButton {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct DirectoryData {
    empty: bool,
    empty_message: String,
    hints: Vec<String>,
    heading: String,
    filtered_note: String,
    active_filters: String,
    rows: Vec<DirectoryRow>,
    summary: String,
    buttons: Vec<PagerButton>,
}

/// Renders one directory page. Empty-state text comes from the command's
/// messages, so `hints` carries whatever the command reported.
pub fn render_directory(dir: &DirectoryPage, filter: &FilterState, hints: &[CmdMessage]) -> String {
    render_directory_internal(dir, filter, hints, None)
}

fn render_directory_internal(
    dir: &DirectoryPage,
    filter: &FilterState,
    hints: &[CmdMessage],
    use_color: Option<bool>,
) -> String {
    let mut hint_lines: Vec<String> = hints.iter().map(|m| m.content.clone()).collect();
    let empty_message = if hint_lines.is_empty() {
        NO_ARTISTS.to_string()
    } else {
        hint_lines.remove(0)
    };

    let rows = dir
        .page
        .items
        .iter()
        .enumerate()
        .map(|(i, artist)| directory_row(dir.page.start_index + i + 1, artist))
        .collect();

    let summary = match dir.page.summary() {
        Some((first, last, total)) => format!(
            "Showing {} to {} of {} results (page {} of {})",
            first, last, total, dir.page.page, dir.page.total_pages
        ),
        None => String::new(),
    };

    let buttons = if dir.page.total_pages > 1 {
        dir.buttons
            .iter()
            .map(|b| match b {
                PageButton::Page(n) if *n == dir.page.page => PagerButton {
                    label: format!("[{}]", n),
                    style: names::CURRENT_PAGE,
                },
                PageButton::Page(n) => PagerButton {
                    label: n.to_string(),
                    style: names::REGULAR,
                },
                PageButton::Ellipsis => PagerButton {
                    label: "…".to_string(),
                    style: names::MUTED,
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    let data = DirectoryData {
        empty: dir.matched == 0,
        empty_message,
        hints: hint_lines,
        heading: format!(
            "{} {} found",
            dir.matched,
            if dir.matched == 1 { "artist" } else { "artists" }
        ),
        filtered_note: if dir.is_filtered() {
            format!("(filtered from {} total)", dir.total_artists)
        } else {
            String::new()
        },
        active_filters: describe_filters(filter),
        rows,
        summary,
        buttons,
    };

    render_template(DIRECTORY_TEMPLATE, &data, use_color)
}

fn directory_row(position: usize, artist: &Artist) -> DirectoryRow {
    let index = format!("{:>4}. ", position);
    let fee = truncate_to_width(&artist.fee_range, FEE_WIDTH);
    let available = LINE_WIDTH.saturating_sub(index.width() + FEE_WIDTH + 2);
    let name = truncate_to_width(&artist.name, available);
    let padding = " ".repeat(
        available.saturating_sub(name.width()) + 2 + FEE_WIDTH.saturating_sub(fee.width()),
    );

    let mut parts = vec![artist.category.join(", "), artist.location.clone()];
    if !artist.languages.is_empty() {
        parts.push(artist.languages.join(", "));
    }
    if !artist.availability {
        parts.push("unavailable".to_string());
    }
    let details = truncate_to_width(
        &parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" · "),
        LINE_WIDTH.saturating_sub(DETAIL_INDENT + 6),
    );

    DirectoryRow {
        index,
        name,
        name_style: if artist.availability {
            names::TITLE
        } else {
            names::UNAVAILABLE
        },
        padding,
        fee,
        indent: " ".repeat(DETAIL_INDENT),
        details,
        rating: match artist.rating {
            Some(r) if r > 0.0 => format!("★ {:.1}", r),
            _ => String::new(),
        },
    }
}

fn describe_filters(filter: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filter.search_term.trim().is_empty() {
        parts.push(format!("search \"{}\"", filter.search_term.trim()));
    }
    if !filter.category.is_empty() {
        parts.push(format!("category: {}", filter.category.join(", ")));
    }
    if !filter.location.is_empty() {
        parts.push(format!("location: {}", filter.location.join(", ")));
    }
    if !filter.price_range.is_empty() {
        parts.push(format!("fee: {}", filter.price_range.join(", ")));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("Filters ({}): {}", filter.active_count(), parts.join("; "))
    }
}

#[derive(Serialize)]
struct ArtistField {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ArtistData {
    name: String,
    available: bool,
    fields: Vec<ArtistField>,
    bio: String,
}

pub fn render_artist(artist: &Artist) -> String {
    render_artist_internal(artist, None)
}

fn render_artist_internal(artist: &Artist, use_color: Option<bool>) -> String {
    let field = |label: &str, value: String, style: &'static str| ArtistField {
        label: format!("{:<12}", format!("{}:", label)),
        value,
        style,
    };

    let mut fields = vec![
        field("ID", artist.id.clone(), names::REGULAR),
        field("Category", artist.category.join(", "), names::REGULAR),
        field("Languages", artist.languages.join(", "), names::REGULAR),
        field("Location", artist.location.clone(), names::REGULAR),
        field("Fee", artist.fee_range.clone(), names::FEE),
    ];
    match artist.rating {
        Some(r) if r > 0.0 => fields.push(field("Rating", format!("★ {:.1}", r), names::RATING)),
        _ => fields.push(field("Rating", "not yet rated".into(), names::MUTED)),
    }
    if let Some(exp) = &artist.experience {
        fields.push(field("Experience", exp.clone(), names::REGULAR));
    }
    if let Some(image) = &artist.profile_image {
        fields.push(field("Image", image.clone(), names::MUTED));
    }
    if let Some(at) = artist.submitted_at {
        fields.push(field("Submitted", format_time_ago(at), names::TIME));
    }

    let data = ArtistData {
        name: artist.name.clone(),
        available: artist.availability,
        fields,
        bio: artist.bio.clone(),
    };
    render_template(ARTIST_TEMPLATE, &data, use_color)
}

/// Several artists, one after another, separated by a blank line.
pub fn render_artists(artists: &[Artist], empty_message: &str) -> String {
    if artists.is_empty() {
        return format!("{}\n", empty_message);
    }
    artists
        .iter()
        .map(render_artist)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct DashboardRow {
    cells: String,
    submitted: String,
    status: &'static str,
    status_style: &'static str,
}

#[derive(Serialize)]
struct DashboardData {
    total: usize,
    pending_review: usize,
    approved: usize,
    categories: String,
    empty: bool,
    empty_message: String,
    header: String,
    rows: Vec<DashboardRow>,
}

const COLUMNS: [(&str, usize); 5] = [
    ("ID", 15),
    ("Name", 22),
    ("Category", 18),
    ("Location", 20),
    ("Fee", 21),
];
const SUBMITTED_WIDTH: usize = 16;

pub fn render_dashboard(stats: &DashboardStats, rows: &[Artist]) -> String {
    render_dashboard_internal(stats, rows, None)
}

fn render_dashboard_internal(
    stats: &DashboardStats,
    rows: &[Artist],
    use_color: Option<bool>,
) -> String {
    let mut header: String = COLUMNS.iter().map(|(h, w)| pad_cell(h, *w)).collect();
    header.push_str(&pad_cell("Submitted", SUBMITTED_WIDTH));
    header.push_str("Status");

    let rows = rows
        .iter()
        .map(|a| {
            let values = [
                a.id.clone(),
                a.name.clone(),
                a.category.join(", "),
                a.location.clone(),
                a.fee_range.clone(),
            ];
            let cells = values
                .iter()
                .zip(COLUMNS.iter())
                .map(|(v, (_, w))| pad_cell(v, *w))
                .collect();
            let submitted = a
                .submitted_at
                .map(format_time_ago)
                .unwrap_or_else(|| "-".to_string());
            let (status, status_style) = if a.is_approved() {
                ("Approved", names::SUCCESS)
            } else {
                ("Pending", names::WARNING)
            };
            DashboardRow {
                cells,
                submitted: pad_cell(&submitted, SUBMITTED_WIDTH),
                status,
                status_style,
            }
        })
        .collect::<Vec<_>>();

    let data = DashboardData {
        total: stats.total,
        pending_review: stats.pending_review,
        approved: stats.approved,
        categories: stats.categories.join(", "),
        empty: rows.is_empty(),
        empty_message: "No artists found".to_string(),
        header,
        rows,
    };
    render_template(DASHBOARD_TEMPLATE, &data, use_color)
}

#[derive(Serialize)]
struct TextLine {
    term: String,
    padding: String,
    desc: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<TextLine>,
    empty_message: String,
}

/// Two-column list: a bold term and a muted description, aligned.
pub fn render_text_list(entries: &[(String, String)], empty_message: &str) -> String {
    render_text_list_internal(entries, empty_message, None)
}

fn render_text_list_internal(
    entries: &[(String, String)],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let width = entries.iter().map(|(t, _)| t.width()).max().unwrap_or(0) + 2;
    let lines = entries
        .iter()
        .map(|(term, desc)| TextLine {
            term: term.clone(),
            padding: " ".repeat(width.saturating_sub(term.width())),
            desc: desc.clone(),
        })
        .collect();
    let data = TextListData {
        lines,
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

pub fn render_categories(categories: &[Category]) -> String {
    let entries: Vec<_> = categories
        .iter()
        .map(|c| (format!("{} {}", c.icon, c.name), c.description.clone()))
        .collect();
    render_text_list(&entries, "No categories.")
}

pub fn render_locations(locations: &[Location]) -> String {
    let entries: Vec<_> = locations
        .iter()
        .map(|l| (l.label(), l.country.clone()))
        .collect();
    render_text_list(&entries, "No locations.")
}

pub fn render_fee_ranges(labels: &[&str]) -> String {
    let entries: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.to_string(), format!("band {}", i + 1)))
        .collect();
    render_text_list(&entries, "No fee ranges.")
}

pub fn render_config(config: &GigbookConfig) -> String {
    let entries: Vec<_> = config
        .entries()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    render_text_list(&entries, "")
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*GIGBOOK_THEME)).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

#[derive(Serialize)]
struct FieldErrorData {
    label: String,
    message: String,
}

#[derive(Serialize)]
struct FieldErrorsData {
    heading: String,
    errors: Vec<FieldErrorData>,
}

/// One line per invalid onboarding field, in form order.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    render_field_errors_internal(errors, None)
}

fn render_field_errors_internal(errors: &FieldErrors, use_color: Option<bool>) -> String {
    let data = FieldErrorsData {
        heading: "Submission rejected, please fix the following:".to_string(),
        errors: errors
            .iter()
            .map(|e| FieldErrorData {
                label: format!("  {:<10}", format!("{}:", e.field)),
                message: e.message.clone(),
            })
            .collect(),
    };
    render_template(FIELD_ERRORS_TEMPLATE, &data, use_color)
}

fn pad_cell(value: &str, width: usize) -> String {
    let shown = truncate_to_width(value, width.saturating_sub(1));
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
