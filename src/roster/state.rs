//! The console state container.
//!
//! [`ConsoleState`] is everything a presentation needs to draw the console: the
//! records, which row is being edited, which rows are selected, the current page and
//! whether the initial fetch has finished. Commands in [`crate::commands`] are the only
//! code that changes it.

use crate::model::{StagedFields, UserId, UserRecord};
use crate::records::RecordStore;
use std::collections::BTreeSet;
use std::ops::Range;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// The staged edit of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: UserId,
    pub staged: StagedFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowEditor {
    #[default]
    Idle,
    Editing(EditSession),
}

impl RowEditor {
    pub fn session(&self) -> Option<&EditSession> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing(session) => Some(session),
        }
    }

    pub fn is_editing(&self, id: &UserId) -> bool {
        self.session().is_some_and(|s| &s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// The current page, pulled back in range if the list has shrunk under it.
    pub fn page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total))
    }

    pub(crate) fn set_page(&mut self, page: usize, total: usize) -> usize {
        self.page = page.clamp(1, self.page_count(total));
        self.page
    }

    pub fn rows(&self, total: usize) -> Range<usize> {
        let start = (self.page(total) - 1) * self.page_size;
        start.min(total)..(start + self.page_size).min(total)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub(crate) records: RecordStore,
    pub(crate) editor: RowEditor,
    pub(crate) selection: BTreeSet<UserId>,
    pub(crate) pager: Pager,
    pub(crate) status: LoadStatus,
}

impl ConsoleState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pager: Pager::new(page_size),
            ..Self::default()
        }
    }

    pub(crate) fn finish_load(&mut self, users: Vec<UserRecord>) {
        self.records.populate(users);
        self.status = LoadStatus::Ready;
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn users(&self) -> &[UserRecord] {
        self.records.working()
    }

    pub fn editor(&self) -> &RowEditor {
        &self.editor
    }

    pub fn selection(&self) -> &BTreeSet<UserId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &UserId) -> bool {
        self.selection.contains(id)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn current_page(&self) -> usize {
        self.pager.page(self.records.len())
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.records.len())
    }

    /// The Working Set rows on the current page.
    pub fn page_rows(&self) -> &[UserRecord] {
        &self.records.working()[self.pager.rows(self.records.len())]
    }
}
