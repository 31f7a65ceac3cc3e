//! # Rendering Module
//!
//! Turns a [`ConsoleState`] into the terminal table. Everything here returns
//! `String`s; printing happens in `commands.rs` and in the redraw listener.
//!
//! Layout math (widths, truncation, padding) is done with `unicode-width` so names
//! with wide characters still line up.

use chrono::{DateTime, Utc};
use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::RosterError;
use roster::model::{Field, UserRecord};
use roster::state::{ConsoleState, LoadStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 32;
const ROLE_WIDTH: usize = 10;
const SEARCH_PLACEHOLDER: &str = "Search By Name, Email or Role";

/// Which rows of the Working Set to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScope {
    /// The current page, as the interactive console shows it.
    Page,
    /// Every row, for one-shot listings.
    All,
}

pub fn render_console(state: &ConsoleState, scope: RowScope) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", SEARCH_PLACEHOLDER.dimmed()));

    match state.status() {
        LoadStatus::Loading => {
            out.push_str("Loading…\n");
            return out;
        }
        LoadStatus::Failed | LoadStatus::Ready => {}
    }

    out.push_str(&header_line());
    out.push('\n');

    let rows = match scope {
        RowScope::Page => state.page_rows(),
        RowScope::All => state.users(),
    };

    if rows.is_empty() {
        out.push_str(&format!("{}\n", "No data".dimmed()));
    }

    for (i, user) in rows.iter().enumerate() {
        out.push_str(&row_line(state, user, i));
        out.push('\n');
    }

    out.push_str(&footer_line(state, scope));
    out.push('\n');
    out
}

fn header_line() -> String {
    let line = format!(
        "    {}  {}  {}  {}  {}",
        pad("ID", ID_WIDTH),
        pad(Field::Name.title(), NAME_WIDTH),
        pad(Field::Email.title(), EMAIL_WIDTH),
        pad(Field::Role.title(), ROLE_WIDTH),
        "Action"
    );
    line.bold().to_string()
}

fn row_line(state: &ConsoleState, user: &UserRecord, position: usize) -> String {
    let checkbox = if state.is_selected(&user.id) {
        "[x]"
    } else {
        "[ ]"
    };
    let id = pad(user.id.as_str(), ID_WIDTH);

    let editing = state.editor().session().filter(|s| s.id == user.id);
    if let Some(session) = editing {
        let cells = [
            (session.staged.name.as_str(), NAME_WIDTH),
            (session.staged.email.as_str(), EMAIL_WIDTH),
            (session.staged.role.as_str(), ROLE_WIDTH),
        ]
        .map(|(value, width)| staged_cell(value, width));
        return format!(
            "{} {}  {}  {}  {}  {}",
            checkbox,
            id,
            cells[0],
            cells[1],
            cells[2],
            "save · cancel".yellow()
        );
    }

    // Edit is unavailable on every other row while a session is open
    let actions = if state.editor().session().is_some() {
        format!("{} · delete", "edit".strikethrough())
    } else {
        "edit · delete".to_string()
    };
    let line = format!(
        "{} {}  {}  {}  {}  {}",
        checkbox,
        id,
        pad(&user.name, NAME_WIDTH),
        pad(&user.email, EMAIL_WIDTH),
        pad(&user.role, ROLE_WIDTH),
        actions
    );

    if position % 2 == 1 {
        line.dimmed().to_string()
    } else {
        line
    }
}

fn staged_cell(value: &str, width: usize) -> String {
    if value.is_empty() {
        pad("<required>", width).red().to_string()
    } else {
        pad(value, width).underline().to_string()
    }
}

fn footer_line(state: &ConsoleState, scope: RowScope) -> String {
    let mut parts = vec![count_label(state.users().len(), "user")];

    if scope == RowScope::Page {
        parts.push(format!(
            "page {} of {}",
            state.current_page(),
            state.page_count()
        ));
    }
    if !state.selection().is_empty() {
        parts.push(format!(
            "{} selected (delete-selected to remove)",
            state.selection().len()
        ));
    }
    if let Some(snapshot) = state.records().snapshot() {
        parts.push(format!("loaded {}", format_age(snapshot.captured_at(), Utc::now())));
    }

    parts.join(" · ").dimmed().to_string()
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Console feedback for an operation that was refused.
pub fn error_messages(err: &RosterError) -> Vec<CmdMessage> {
    match err {
        RosterError::Validation { missing } => missing
            .iter()
            .map(|f| CmdMessage::warning(f.required_message()))
            .collect(),
        RosterError::EditInProgress(id) => vec![CmdMessage::warning(format!(
            "Finish editing user {} first (save or cancel).",
            id
        ))],
        RosterError::Network(_)
        | RosterError::Format(_)
        | RosterError::Io(_)
        | RosterError::Serialization(_)
        | RosterError::Config(_) => vec![CmdMessage::error(err.to_string())],
        other => vec![CmdMessage::warning(other.to_string())],
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn pad(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}
