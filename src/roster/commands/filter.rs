use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserRecord;
use crate::state::ConsoleState;

/// Queries shorter than this reset the search instead of filtering.
///
/// Length is counted in `char`s, so an emoji counts once rather than as two UTF-16 units.
pub const MIN_QUERY_CHARS: usize = 2;

/// True when any of name, email or role contains `query` (case-sensitive).
pub fn matches(record: &UserRecord, query: &str) -> bool {
    record.name.contains(query) || record.email.contains(query) || record.role.contains(query)
}

/// Applies a search query to the Working Set.
///
/// A query shorter than [`MIN_QUERY_CHARS`] restores the Snapshot. Anything longer
/// narrows the *current* Working Set, so consecutive queries compose until the
/// search box is cleared.
pub fn run(state: &mut ConsoleState, query: &str) -> Result<CmdResult> {
    let before = state.records.len();

    if query.chars().count() < MIN_QUERY_CHARS {
        state.records.restore_snapshot();
        tracing::debug!(restored = state.records.len(), "search cleared");
    } else {
        state.records.retain(|r| matches(r, query));
        tracing::debug!(query, before, after = state.records.len(), "search applied");
    }
    state.pager.set_page(1, state.records.len());

    let shown = state.records.len();
    let result = CmdResult::default();
    Ok(if shown == 0 {
        result.with_message(CmdMessage::info("No users match."))
    } else {
        result
    })
}
