//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every console operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`ConsoleState`] and the [`UserSource`]
//! - **Dispatches** to the matching command function
//! - **Notifies** registered listeners after every successful state change
//!
//! A presentation subscribes once and redraws from `&ConsoleState` whenever it is
//! called back. It never needs to know which operation caused the change.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or formatting
//!
//! ## Generic Over UserSource
//!
//! `RosterApi<S: UserSource>` works the same over `HttpSource`, `FileSource` and
//! `InMemorySource`, so the API can be tested without a network.

use crate::commands::{self, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Field, UserId, UserRecord};
use crate::source::UserSource;
use crate::state::{ConsoleState, LoadStatus};

/// Callback invoked with the new state after each change.
pub type Listener = Box<dyn FnMut(&ConsoleState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct RosterApi<S: UserSource> {
    source: S,
    state: ConsoleState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: UserSource> RosterApi<S> {
    pub fn new(source: S) -> Self {
        Self::with_state(source, ConsoleState::default())
    }

    pub fn with_page_size(source: S, page_size: usize) -> Self {
        Self::with_state(source, ConsoleState::with_page_size(page_size))
    }

    fn with_state(source: S, state: ConsoleState) -> Self {
        Self {
            source,
            state,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ConsoleState) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Fetches the user list. Only the first call reaches the source.
    pub async fn load(&mut self) -> Result<CmdResult> {
        if self.state.status != LoadStatus::Loading {
            return Err(RosterError::AlreadyLoaded);
        }

        match self.source.fetch_users().await {
            Ok(users) => {
                tracing::info!(
                    source = %self.source.describe(),
                    count = users.len(),
                    "users loaded"
                );
                self.state.finish_load(users);
                self.notify();
                Ok(CmdResult::default())
            }
            Err(err) => {
                tracing::error!(
                    source = %self.source.describe(),
                    error = %err,
                    "failed to load users"
                );
                self.state.status = LoadStatus::Failed;
                self.notify();
                Err(err)
            }
        }
    }

    pub fn filter(&mut self, query: &str) -> Result<CmdResult> {
        self.apply(|state| commands::filter::run(state, query))
    }

    pub fn edit(&mut self, record: &UserRecord) -> Result<CmdResult> {
        self.apply(|state| commands::edit::start(state, record))
    }

    /// Opens an edit session for the Working Set row with `id`.
    pub fn edit_by_id(&mut self, id: &UserId) -> Result<CmdResult> {
        let record = self
            .state
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id.clone()))?;
        self.edit(&record)
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<CmdResult> {
        self.apply(|state| commands::edit::set_field(state, field, value))
    }

    pub fn save(&mut self, id: &UserId) -> Result<CmdResult> {
        self.apply(|state| commands::edit::save(state, id))
    }

    pub fn cancel(&mut self) -> Result<CmdResult> {
        self.apply(commands::edit::cancel)
    }

    pub fn toggle_selection<I>(&mut self, ids: I) -> Result<CmdResult>
    where
        I: IntoIterator<Item = UserId>,
    {
        self.apply(|state| commands::selection::replace(state, ids))
    }

    pub fn select_page(&mut self) -> Result<CmdResult> {
        self.apply(commands::selection::select_page)
    }

    pub fn clear_selection(&mut self) -> Result<CmdResult> {
        self.apply(commands::selection::clear)
    }

    pub fn delete_one(&mut self, id: &UserId) -> Result<CmdResult> {
        self.apply(|state| commands::delete::one(state, id))
    }

    pub fn delete_selected(&mut self) -> Result<CmdResult> {
        self.apply(commands::delete::selected)
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<CmdResult> {
        self.apply(|state| commands::paging::go_to(state, page))
    }

    pub fn next_page(&mut self) -> Result<CmdResult> {
        self.apply(commands::paging::next)
    }

    pub fn previous_page(&mut self) -> Result<CmdResult> {
        self.apply(commands::paging::previous)
    }

    fn apply<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut ConsoleState) -> Result<CmdResult>,
    {
        let result = op(&mut self.state)?;
        self.notify();
        Ok(result)
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

pub use crate::commands::{CmdMessage, MessageLevel, SaveOutcome};
