//! Inline row editing.
//!
//! The editor is a two-state machine: `Idle` or `Editing(id)` with staged field
//! values. Only one row can be edited at a time; [`start`] refuses to open a second
//! session rather than relying on the presentation to disable its edit controls.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Field, StagedFields, UserId, UserRecord};
use crate::state::{ConsoleState, EditSession, RowEditor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was replaced in place.
    Updated,
    /// No record had the id, so the staged values were appended as a new record.
    Appended,
}

pub fn start(state: &mut ConsoleState, record: &UserRecord) -> Result<CmdResult> {
    if let Some(active) = state.editor.session() {
        return Err(RosterError::EditInProgress(active.id.clone()));
    }

    state.editor = RowEditor::Editing(EditSession {
        id: record.id.clone(),
        staged: StagedFields::from_record(record),
    });
    tracing::debug!(id = %record.id, "edit started");

    Ok(CmdResult::default())
}

pub fn set_field(state: &mut ConsoleState, field: Field, value: &str) -> Result<CmdResult> {
    match &mut state.editor {
        RowEditor::Idle => Err(RosterError::NoEditSession),
        RowEditor::Editing(session) => {
            session.staged.set(field, value);
            Ok(CmdResult::default())
        }
    }
}

/// Commits the staged values to the record with `id`.
///
/// Empty fields fail validation: the session stays open and nothing changes.
pub fn save(state: &mut ConsoleState, id: &UserId) -> Result<CmdResult> {
    let session = state.editor.session().ok_or(RosterError::NoEditSession)?;

    let missing = session.staged.missing();
    if !missing.is_empty() {
        tracing::warn!(id = %id, ?missing, "validate failed");
        return Err(RosterError::Validation { missing });
    }

    let staged = session.staged.clone();
    state.editor = RowEditor::Idle;

    let (record, outcome) = match state.records.position(id) {
        Some(index) => {
            let original_id = state.records.working()[index].id.clone();
            let record = staged.into_record(original_id);
            state.records.replace_at(index, record.clone());
            (record, SaveOutcome::Updated)
        }
        None => {
            let record = staged.into_record(id.clone());
            state.records.push(record.clone());
            (record, SaveOutcome::Appended)
        }
    };
    tracing::debug!(id = %id, ?outcome, "edit saved");

    let message = match outcome {
        SaveOutcome::Updated => format!("User saved: {}", record.name),
        SaveOutcome::Appended => format!("User added: {}", record.name),
    };
    Ok(CmdResult::default()
        .with_saved(outcome)
        .with_affected_users(vec![record])
        .with_message(CmdMessage::success(message)))
}

/// Drops the staged values. Cancelling while idle does nothing.
pub fn cancel(state: &mut ConsoleState) -> Result<CmdResult> {
    if let RowEditor::Editing(session) = std::mem::take(&mut state.editor) {
        tracing::debug!(id = %session.id, "edit cancelled");
    }
    Ok(CmdResult::default())
}
