use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("store write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
}

impl StoreError {
    pub fn read(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn write(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
