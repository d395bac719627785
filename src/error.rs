use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("wrong name or password")]
    BadCredentials,
    #[error("no user is signed in")]
    NoSession,
    #[error("user name must not be empty")]
    EmptyName,
    #[error("user name {0:?} is already taken")]
    NameTaken(String),
    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}
