use super::{decode_users, UserSource};
use crate::error::{Result, RosterError};
use crate::model::UserRecord;
use std::path::PathBuf;

/// Reads the user list payload from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserSource for FileSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(path = %self.path.display(), "reading users");

        // An unreadable file is the local equivalent of an unreachable resource
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RosterError::Network(format!("{}: {}", self.path.display(), e)))?;

        decode_users(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn reads_users_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");
        fs::write(
            &path,
            r#"[{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#,
        )
        .unwrap();

        let users = FileSource::new(&path).fetch_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "aaron@mailinator.com");
    }

    #[tokio::test]
    async fn missing_file_is_a_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));

        let err = source.fetch_users().await.unwrap_err();
        assert!(matches!(err, RosterError::Network(_)));
    }

    #[tokio::test]
    async fn garbage_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");
        fs::write(&path, "not json").unwrap();

        let err = FileSource::new(&path).fetch_users().await.unwrap_err();
        assert!(matches!(err, RosterError::Format(_)));
    }
}
