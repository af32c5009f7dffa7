pub const TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage operation failed: {reason}")]
    OperationFailed { reason: String },
}

type Result<T> = std::result::Result<T, StorageError>;

/// Holder of the session token issued on login.
pub trait TokenStore {
    fn token(&self) -> Result<Option<String>>;

    fn store_token(&self, token: &str) -> Result<()>;

    /// Empty tokens count as logged out.
    fn has_token(&self) -> Result<bool> {
        Ok(self.token()?.is_some_and(|t| !t.is_empty()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::OperationFailed {
                reason: format!("{:?}", e),
            })?
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStore for LocalStorage {
    fn token(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .map_err(|e| StorageError::OperationFailed {
                reason: format!("{:?}", e),
            })
    }

    fn store_token(&self, token: &str) -> Result<()> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StorageError::OperationFailed {
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryTokens(pub std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self(std::cell::RefCell::new(Some(token.to_owned())))
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.0.borrow().clone())
    }

    fn store_token(&self, token: &str) -> Result<()> {
        *self.0.borrow_mut() = Some(token.to_owned());
        Ok(())
    }
}
