//! Automatic config backups taken before mutating operations.
//!
//! A backup is `<config>.<unix-millis>.bak` next to the original. The copy
//! runs on a detached tokio task so the caller proceeds immediately; the
//! original bytes are snapshotted before `create_backup` returns, which keeps
//! a write the caller makes right afterwards out of the backup.
//!
//! Failures are never dropped: each task's result is held until
//! [`BackupManager::settle`] runs on the exit path, where an error becomes a
//! fatal process exit.

use std::ffi::OsString;
use std::fs::Permissions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::BackupError;
use crate::locate;
use crate::platform::Environment;

/// Outcome of a backup request, known synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupRequest {
    /// No config exists; nothing to back up.
    NoOp,
    /// A copy task was spawned.
    Scheduled,
}

/// Spawns backup copies and collects their outcomes for the exit path.
#[derive(Debug)]
pub struct BackupManager {
    runtime: Handle,
    pending: Mutex<Vec<JoinHandle<Result<PathBuf, BackupError>>>>,
}

impl BackupManager {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Back up the located config without waiting for the copy.
    pub fn create_backup(&self, env: &dyn Environment) -> BackupRequest {
        if !locate::config_exists(env) {
            tracing::debug!("no alacritty config present; skipping backup");
            return BackupRequest::NoOp;
        }
        // The file may vanish between the two checks; treat that as no config.
        let Ok(source) = locate::config_path(env) else {
            return BackupRequest::NoOp;
        };
        let target = backup_path(&source, unix_millis());
        let snapshot = std::fs::read(&source);
        let permissions = std::fs::metadata(&source).map(|meta| meta.permissions()).ok();

        tracing::debug!(source = %source.display(), target = %target.display(), "scheduling backup");
        let handle = self
            .runtime
            .spawn(write_backup(source, target, snapshot, permissions));
        self.pending().push(handle);
        BackupRequest::Scheduled
    }

    /// Number of backup tasks not yet settled.
    pub fn pending_count(&self) -> usize {
        self.pending().len()
    }

    /// Wait for outstanding backups and re-raise the first failure.
    ///
    /// Returns the created backup paths in request order on success.
    pub async fn settle(&self) -> Result<Vec<PathBuf>, BackupError> {
        let handles = std::mem::take(&mut *self.pending());
        let mut created = Vec::with_capacity(handles.len());
        let mut failure = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(path)) => created.push(path),
                Ok(Err(err)) => {
                    failure.get_or_insert(err);
                }
                Err(join_err) => {
                    failure.get_or_insert(BackupError::Task(join_err.to_string()));
                }
            }
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(created),
        }
    }

    fn pending(&self) -> MutexGuard<'_, Vec<JoinHandle<Result<PathBuf, BackupError>>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

async fn write_backup(
    source: PathBuf,
    target: PathBuf,
    snapshot: std::io::Result<Vec<u8>>,
    permissions: Option<Permissions>,
) -> Result<PathBuf, BackupError> {
    match copy_snapshot(&target, snapshot, permissions).await {
        Ok(()) => {
            tracing::info!(target = %target.display(), "backup created");
            println!("Automatic backup file was created: {}", target.display());
            Ok(target)
        }
        Err(err) => {
            tracing::error!(source = %source.display(), error = %err, "backup failed");
            Err(BackupError::Copy {
                source,
                target,
                err,
            })
        }
    }
}

async fn copy_snapshot(
    target: &Path,
    snapshot: std::io::Result<Vec<u8>>,
    permissions: Option<Permissions>,
) -> std::io::Result<()> {
    let bytes = snapshot?;
    tokio::fs::write(target, &bytes).await?;
    if let Some(permissions) = permissions {
        tokio::fs::set_permissions(target, permissions).await?;
    }
    Ok(())
}

/// `<path>.<millis>.bak`, appended to the full file name.
pub fn backup_path(path: &Path, millis: u128) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{millis}.bak"));
    PathBuf::from(name)
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
