use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("gallery folder name must not be empty (section {0})")]
    EmptyFolderName(String),
    #[error("gallery section key must not be empty")]
    EmptySectionKey,
    #[error("background sentinel name must not be empty")]
    EmptySentinelName,
}
