/// Convenience result type used across songtiles.
pub type SongTilesResult<T> = Result<T, SongTilesError>;

/// Top-level error taxonomy used by sheet generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum SongTilesError {
    /// Invalid user-provided data (identifiers, song lists, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures talking to the music catalog, including non-success responses.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// QR bitmap encoding failed for a single payload.
    #[error("qr error: {0}")]
    Qr(String),

    /// Drawing surface or document serialization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SongTilesError {
    /// Build a [`SongTilesError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SongTilesError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`SongTilesError::Qr`] value.
    pub fn qr(msg: impl Into<String>) -> Self {
        Self::Qr(msg.into())
    }

    /// Build a [`SongTilesError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SongTilesError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
