use super::UserSource;
use crate::error::{Result, RosterError};
use crate::model::UserRecord;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Failure {
    Network(String),
    Format(String),
}

/// In-memory source for testing and development.
/// Hands out a fixed list, or a fixed failure.
#[derive(Debug, Default)]
pub struct InMemorySource {
    users: Vec<UserRecord>,
    failure: Option<Failure>,
    fetches: AtomicUsize,
}

impl InMemorySource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn failing_network(message: impl Into<String>) -> Self {
        Self {
            failure: Some(Failure::Network(message.into())),
            ..Self::default()
        }
    }

    pub fn failing_format(message: impl Into<String>) -> Self {
        Self {
            failure: Some(Failure::Format(message.into())),
            ..Self::default()
        }
    }

    /// How many times `fetch_users` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl UserSource for InMemorySource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some(Failure::Network(msg)) => Err(RosterError::Network(msg.clone())),
            Some(Failure::Format(msg)) => Err(RosterError::Format(msg.clone())),
            None => Ok(self.users.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::RosterApi;
    use crate::state::ConsoleState;

    /// A small slice of the production member list.
    pub fn members() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
            UserRecord::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            UserRecord::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
            UserRecord::new("4", "Caterina Binotto", "caterina@mailinator.com", "member"),
            UserRecord::new("5", "Chetan Kumar", "chetan@mailinator.com", "member"),
        ]
    }

    /// `count` generated users, ids `1..=count`.
    pub fn numbered(count: usize) -> Vec<UserRecord> {
        (1..=count)
            .map(|i| {
                UserRecord::new(
                    i.to_string(),
                    format!("User {}", i),
                    format!("user{}@mailinator.com", i),
                    "member",
                )
            })
            .collect()
    }

    /// A state that has already received `users` from a source.
    pub fn loaded_state(users: Vec<UserRecord>) -> ConsoleState {
        let mut state = ConsoleState::default();
        state.finish_load(users);
        state
    }

    /// An API over the fixture members that has already loaded them.
    pub async fn loaded_api() -> RosterApi<InMemorySource> {
        let mut api = RosterApi::new(InMemorySource::new(members()));
        api.load().await.unwrap();
        api
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::members;
    use super::*;

    #[tokio::test]
    async fn returns_configured_users() {
        let source = InMemorySource::new(members());
        let users = source.fetch_users().await.unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn returns_configured_failures() {
        let network = InMemorySource::failing_network("offline");
        assert!(matches!(
            network.fetch_users().await,
            Err(RosterError::Network(_))
        ));

        let format = InMemorySource::failing_format("bad payload");
        assert!(matches!(
            format.fetch_users().await,
            Err(RosterError::Format(_))
        ));
    }
}
