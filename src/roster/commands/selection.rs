use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::UserId;
use crate::state::ConsoleState;

/// Replaces the Selection Set with `ids`.
///
/// The presentation hands over the complete new selection on every change, the
/// way a table's checkbox column reports it.
pub fn replace<I>(state: &mut ConsoleState, ids: I) -> Result<CmdResult>
where
    I: IntoIterator<Item = UserId>,
{
    state.selection = ids.into_iter().collect();
    tracing::debug!(selected = state.selection.len(), "selection changed");
    Ok(CmdResult::default())
}

/// Selects exactly the rows on the current page, like a header checkbox.
pub fn select_page(state: &mut ConsoleState) -> Result<CmdResult> {
    let ids: Vec<UserId> = state.page_rows().iter().map(|r| r.id.clone()).collect();
    replace(state, ids)
}

pub fn clear(state: &mut ConsoleState) -> Result<CmdResult> {
    replace(state, std::iter::empty::<UserId>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::paging;
    use crate::source::memory::fixtures::{loaded_state, members, numbered};

    #[test]
    fn replace_overwrites_previous_selection() {
        let mut state = loaded_state(members());
        replace(&mut state, vec![UserId::new("1"), UserId::new("2")]).unwrap();
        replace(&mut state, vec![UserId::new("3")]).unwrap();

        assert_eq!(state.selection().len(), 1);
        assert!(state.is_selected(&UserId::new("3")));
        assert!(!state.is_selected(&UserId::new("1")));
    }

    #[test]
    fn select_page_takes_only_visible_rows() {
        let mut state = loaded_state(numbered(15));
        paging::go_to(&mut state, 2).unwrap();
        select_page(&mut state).unwrap();

        let selected: Vec<_> = state.selection().iter().map(|id| id.as_str()).collect();
        assert_eq!(selected.len(), 5);
        assert!(selected.contains(&"11"));
        assert!(!selected.contains(&"1"));
    }

    #[test]
    fn clear_empties_selection() {
        let mut state = loaded_state(members());
        replace(&mut state, vec![UserId::new("1")]).unwrap();
        clear(&mut state).unwrap();
        assert!(state.selection().is_empty());
    }
}
