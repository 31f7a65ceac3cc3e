use crate::commands::{edit, CmdResult};
use crate::error::Result;
use crate::state::ConsoleState;

/// Moves to `page` (clamped to the available pages).
///
/// Changing pages abandons any open edit session, staged values included.
pub fn go_to(state: &mut ConsoleState, page: usize) -> Result<CmdResult> {
    edit::cancel(state)?;
    let total = state.records.len();
    let landed = state.pager.set_page(page, total);
    tracing::debug!(requested = page, landed, "page changed");
    Ok(CmdResult::default())
}

pub fn next(state: &mut ConsoleState) -> Result<CmdResult> {
    let page = state.current_page() + 1;
    go_to(state, page)
}

pub fn previous(state: &mut ConsoleState) -> Result<CmdResult> {
    let page = state.current_page().saturating_sub(1);
    go_to(state, page)
}
