//! Long-lived SQLite connection for the relational provider.
//!
//! The connection is opened once at startup. If that fails the manager is
//! left `Unavailable` and every later query short-circuits with
//! `ConnectionUnavailable` before touching SQLite. Status only moves
//! forward: Open -> Closed, never back.

use crate::error::{ProviderError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

enum ConnectionState {
    Open(Connection),
    Unavailable { reason: String },
    Closed,
}

/// Owns the single connection to the relational catalog.
///
/// `rusqlite::Connection` is `Send` but not `Sync`, so it sits behind a
/// mutex; one interaction never issues two queries at once, so the lock is
/// uncontended.
pub struct ConnectionManager {
    path: PathBuf,
    state: Mutex<ConnectionState>,
}

impl ConnectionManager {
    /// Open the store at `path` read-only.
    ///
    /// A missing file is an error rather than a fresh empty database.
    pub fn open(path: &Path) -> Self {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let state = match Connection::open_with_flags(path, flags) {
            Ok(conn) => {
                info!("Connected to relational catalog at {}", path.display());
                ConnectionState::Open(conn)
            }
            Err(e) => {
                error!("Failed to open relational catalog at {}: {}", path.display(), e);
                ConnectionState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        Self {
            path: path.to_path_buf(),
            state: Mutex::new(state),
        }
    }

    /// Adopt an already opened connection (in-memory stores, tests)
    pub fn from_connection(conn: Connection) -> Self {
        let path = conn.path().map(PathBuf::from).unwrap_or_default();
        Self {
            path,
            state: Mutex::new(ConnectionState::Open(conn)),
        }
    }

    /// A manager whose startup failed for `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            state: Mutex::new(ConnectionState::Unavailable {
                reason: reason.into(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok` while the connection is open
    pub fn status(&self) -> Result<()> {
        match &*self.lock() {
            ConnectionState::Open(_) => Ok(()),
            ConnectionState::Unavailable { reason } => Err(ProviderError::ConnectionUnavailable {
                reason: reason.clone(),
            }),
            ConnectionState::Closed => Err(closed()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status().is_ok()
    }

    /// Run `f` against the open connection.
    ///
    /// `f` is not called at all when the connection is unavailable or closed.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        match &*self.lock() {
            ConnectionState::Open(conn) => f(conn).map_err(ProviderError::from),
            ConnectionState::Unavailable { reason } => Err(ProviderError::ConnectionUnavailable {
                reason: reason.clone(),
            }),
            ConnectionState::Closed => Err(closed()),
        }
    }

    /// Release the connection. Failures are logged, never returned.
    pub fn close(&self) {
        let previous = std::mem::replace(&mut *self.lock(), ConnectionState::Closed);
        if let ConnectionState::Open(conn) = previous {
            match conn.close() {
                Ok(()) => info!("Closed relational catalog connection"),
                Err((_conn, e)) => warn!("Failed to close relational catalog connection: {}", e),
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConnectionState> {
        // A panic while holding the lock cannot leave the state half-written,
        // so a poisoned guard is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        self.close();
    }
}

fn closed() -> ProviderError {
    ProviderError::ConnectionUnavailable {
        reason: "connection already closed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConnectionManager::open(&dir.path().join("projects.db"));

        assert!(!manager.is_available());
        assert!(matches!(
            manager.status(),
            Err(ProviderError::ConnectionUnavailable { .. })
        ));
        // Opening read-only must not create the file
        assert!(!dir.path().join("projects.db").exists());
    }

    #[test]
    fn test_unavailable_never_runs_the_query() {
        let manager = ConnectionManager::unavailable("disk on fire");
        let mut called = false;

        let result = manager.with_connection(|_| {
            called = true;
            Ok(())
        });

        assert!(!called);
        assert_eq!(
            result,
            Err(ProviderError::ConnectionUnavailable {
                reason: "disk on fire".to_string()
            })
        );
    }

    #[test]
    fn test_open_connection_runs_queries() {
        let manager = ConnectionManager::from_connection(Connection::open_in_memory().unwrap());
        let value: i64 = manager
            .with_connection(|conn| conn.query_row("SELECT 41 + 1", [], |row| row.get(0)))
            .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_close_is_final() {
        let manager = ConnectionManager::from_connection(Connection::open_in_memory().unwrap());
        manager.close();
        assert!(!manager.is_available());
        // Closing twice is harmless
        manager.close();
        assert!(manager.with_connection(|_| Ok(())).is_err());
    }

    #[test]
    fn test_query_error_becomes_query_failure() {
        let manager = ConnectionManager::from_connection(Connection::open_in_memory().unwrap());
        let err = manager
            .with_connection(|conn| conn.execute("SELECT * FROM NoSuchTable", []))
            .unwrap_err();
        assert!(matches!(err, ProviderError::QueryFailure { .. }));
    }
}
