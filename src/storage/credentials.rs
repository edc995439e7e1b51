use crate::error::StorageError;
use std::fmt::Debug;
use std::sync::RwLock;

#[cfg(not(test))]
use keyring::Entry;

type Result<T> = std::result::Result<T, StorageError>;

/// Pluggable bearer-token persistence.
///
/// The engine only ever reads the current token while building a request, so
/// `get` is infallible; a store that cannot be read behaves as if no token is
/// set.
pub trait TokenStore: Send + Sync + Debug {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Default store: session-scoped, nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Persistent store backed by the OS keyring.
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    account: String,
}

impl KeyringTokenStore {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }

    #[cfg(not(test))]
    fn entry(&self) -> Result<Entry> {
        Entry::new("sitekit", &self.account)
            .map_err(|e| StorageError::KeyringError(e.to_string()))
    }
}

#[cfg(not(test))]
impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Option<String> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("keyring unavailable for {}: {}", self.account, e);
                return None;
            }
        };

        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                log::warn!("failed to read token for {}: {}", self.account, e);
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .map_err(|e| StorageError::KeyringError(e.to_string()))
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(_) => Ok(()),
            // Entry doesn't exist, which is fine for logout
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::KeyringError(e.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Option<String> {
        println!("MOCK: Loading token for account {}", self.account);
        None
    }

    fn set(&self, _token: &str) -> Result<()> {
        println!("MOCK: Saving token for account {}", self.account);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        println!("MOCK: Deleting token for account {}", self.account);
        Ok(())
    }
}
