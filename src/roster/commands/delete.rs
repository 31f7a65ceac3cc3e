use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{UserId, UserRecord};
use crate::state::ConsoleState;

/// Removes the record with `id` from the Working Set. Unknown ids are ignored.
pub fn one(state: &mut ConsoleState, id: &UserId) -> Result<CmdResult> {
    let removed = remove_where(state, |r| &r.id == id);
    let result = match removed.first() {
        Some(user) => CmdResult::default().with_message(CmdMessage::success(format!(
            "User deleted: {}",
            user.name
        ))),
        None => CmdResult::default(),
    };
    Ok(result.with_affected_users(removed))
}

/// Removes every record whose id is in the Selection Set.
///
/// The Selection Set itself is left alone, so it may keep ids that are no longer
/// in the Working Set.
pub fn selected(state: &mut ConsoleState) -> Result<CmdResult> {
    let selection = state.selection.clone();
    let removed = remove_where(state, |r| selection.contains(&r.id));

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info("No selected users to delete."));
    } else if removed.len() == 1 {
        result.add_message(CmdMessage::success("1 user deleted"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} users deleted",
            removed.len()
        )));
    }
    Ok(result.with_affected_users(removed))
}

fn remove_where<F>(state: &mut ConsoleState, doomed: F) -> Vec<UserRecord>
where
    F: Fn(&UserRecord) -> bool,
{
    let removed: Vec<UserRecord> = state
        .records
        .working()
        .iter()
        .filter(|r| doomed(*r))
        .cloned()
        .collect();
    if !removed.is_empty() {
        state.records.retain(|r| !doomed(r));
        tracing::debug!(
            removed = removed.len(),
            remaining = state.records.len(),
            "users deleted"
        );
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::selection;
    use crate::source::memory::fixtures::{loaded_state, members};

    fn ids(state: &ConsoleState) -> Vec<&str> {
        state.users().iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn deletes_single_record() {
        let mut state = loaded_state(members());
        let result = one(&mut state, &UserId::new("2")).unwrap();

        assert_eq!(ids(&state), vec!["1", "3", "4", "5"]);
        assert_eq!(result.affected_users.len(), 1);
        assert_eq!(result.affected_users[0].name, "Aishwarya Naik");
    }

    #[test]
    fn deleting_unknown_id_changes_nothing() {
        let mut state = loaded_state(members());
        let result = one(&mut state, &UserId::new("404")).unwrap();

        assert_eq!(state.users(), members().as_slice());
        assert!(result.affected_users.is_empty());
    }

    #[test]
    fn single_delete_leaves_selection_alone() {
        let mut state = loaded_state(members());
        selection::replace(&mut state, vec![UserId::new("2"), UserId::new("3")]).unwrap();
        one(&mut state, &UserId::new("2")).unwrap();
        assert_eq!(state.selection().len(), 2);
    }

    #[test]
    fn deletes_exactly_the_selected_records() {
        let mut state = loaded_state(members());
        selection::replace(
            &mut state,
            vec![UserId::new("1"), UserId::new("4"), UserId::new("404")],
        )
        .unwrap();

        let result = selected(&mut state).unwrap();

        assert_eq!(ids(&state), vec!["2", "3", "5"]);
        assert_eq!(result.affected_users.len(), 2);
        assert_eq!(result.messages[0].content, "2 users deleted");
    }

    #[test]
    fn bulk_delete_leaves_selection_stale() {
        let mut state = loaded_state(members());
        selection::replace(&mut state, vec![UserId::new("1")]).unwrap();
        let first = selected(&mut state).unwrap();
        assert_eq!(first.messages[0].content, "1 user deleted");

        assert!(state.is_selected(&UserId::new("1")));
        assert!(state.records().get(&UserId::new("1")).is_none());

        // A second bulk delete finds nothing left to remove
        let again = selected(&mut state).unwrap();
        assert!(again.affected_users.is_empty());
        assert_eq!(state.users().len(), 4);
    }

    #[test]
    fn bulk_delete_with_empty_selection_is_a_no_op() {
        let mut state = loaded_state(members());
        let result = selected(&mut state).unwrap();
        assert_eq!(state.users().len(), 5);
        assert!(result.affected_users.is_empty());
    }
}
