//! # File I/O Module
//!
//! Host-side persistence for calculation history and engine settings:
//! - **Atomic saves**: write to `.tmp`, sync, rename to prevent corruption
//! - **File locking**: one writer at a time on shared drives
//! - **Version validation**: refuse history files from a newer schema
//!
//! ## File Format
//!
//! History is a single JSON document ([`CalculationHistory`]). Lock files sit
//! next to it with a `.lock` suffix and record who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gundrill_core::calculations::{compute_standard_time, JobParameters};
//! use gundrill_core::file_io::append_to_history;
//! use std::path::Path;
//!
//! let job = JobParameters::new("13CR", 0.299, 10.0, 0.8);
//! let breakdown = compute_standard_time(&job)?;
//! append_to_history(Path::new("history.json"), "operator", "J-1001", "Mandrel", job, breakdown)?;
//! # Ok::<(), gundrill_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculations::{JobParameters, TimeBreakdown};
use crate::errors::{CalcError, CalcResult};
use crate::history::{CalculationHistory, SCHEMA_VERSION};
use crate::settings::EngineSettings;

/// Lock file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Holds an OS-level lock (fs2) and a `.lock` file with metadata so other
/// users can see who is writing.
pub struct FileLock {
    target_path: PathBuf,
    lock_path: PathBuf,
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a file.
    ///
    /// The OS lock decides ownership. A `.lock` file left behind by a process
    /// that no longer holds the OS lock is taken over.
    ///
    /// # Errors
    ///
    /// `CalcError::FileLocked` if another process holds the lock.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // Not truncated: a failed attempt must leave the holder's metadata intact
        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("open lock", lock_path.display().to_string(), e.to_string())
            })?;

        if lock_file.try_lock_exclusive().is_err() {
            return Err(match read_lock_info(&lock_path) {
                Ok(holder) => CalcError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", holder.user_id, holder.machine),
                    holder.locked_at.to_rfc3339(),
                ),
                Err(_) => CalcError::file_locked(
                    path.display().to_string(),
                    "another process".to_string(),
                    "unknown".to_string(),
                ),
            });
        }

        let mut previous = String::new();
        if lock_file.read_to_string(&mut previous).is_ok() {
            if let Ok(stale) = serde_json::from_str::<LockInfo>(&previous) {
                warn!(
                    path = %path.display(),
                    holder = %stale.user_id,
                    pid = stale.pid,
                    "taking over stale lock"
                );
            }
        }

        let lock_json = serde_json::to_string_pretty(&info)?;
        let write_err =
            |e: std::io::Error| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string());

        lock_file.set_len(0).map_err(write_err)?;
        lock_file.seek(SeekFrom::Start(0)).map_err(write_err)?;
        lock_file.write_all(lock_json.as_bytes()).map_err(write_err)?;

        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            target_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Path of the locked file
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = read_to_string(lock_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write JSON to `path` via a synced temp file and rename
fn write_atomic(path: &Path, json: &str) -> CalcResult<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save history with atomic write semantics.
pub fn save_history(history: &CalculationHistory, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(history)?;
    write_atomic(path, &json)
}

/// Load history from a file.
///
/// # Errors
///
/// * `CalcError::VersionMismatch` - file written by an incompatible schema
/// * `CalcError::SerializationError` - invalid JSON
/// * `CalcError::FileError` - I/O error
pub fn load_history(path: &Path) -> CalcResult<CalculationHistory> {
    let contents = read_to_string(path)?;

    let history: CalculationHistory =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&history.meta.version)?;

    Ok(history)
}

/// Load history, or start an empty one if the file does not exist yet.
pub fn load_or_create_history(path: &Path) -> CalcResult<CalculationHistory> {
    if path.exists() {
        load_history(path)
    } else {
        Ok(CalculationHistory::new())
    }
}

/// Lock the history file, add one calculation and save it.
///
/// Returns the id of the new entry.
pub fn append_to_history(
    path: &Path,
    user_id: &str,
    job_id: &str,
    part_name: &str,
    parameters: JobParameters,
    breakdown: TimeBreakdown,
) -> CalcResult<Uuid> {
    let _lock = FileLock::acquire(path, user_id)?;
    let mut history = load_or_create_history(path)?;
    let id = history.record(job_id, part_name, parameters, breakdown);
    save_history(&history, path)?;
    info!(path = %path.display(), %id, entries = history.len(), "calculation archived");
    Ok(id)
}

/// Load engine settings from a JSON file. Missing keys take their defaults.
pub fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let contents = read_to_string(path)?;
    let settings: EngineSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), e),
        })?;
    settings.time_constants.validate()?;
    Ok(settings)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor version may have breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute_standard_time;
    use crate::settings::{CustomTimePolicy, ResolvePolicy};
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!(
            "gundrill_test_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    fn sample() -> (JobParameters, TimeBreakdown) {
        let job = JobParameters::new("25CR", 0.375, 10.0, 0.35).with_fmj_port(true);
        let breakdown = compute_standard_time(&job).unwrap();
        (job, breakdown)
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/shop/history.json"));
        assert_eq!(lock_path, Path::new("/shop/history.json.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("operator@shop");
        assert_eq!(info.user_id, "operator@shop");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let mut history = CalculationHistory::new();
        let (job, b) = sample();
        history.record("J-100", "Sub", job, b);
        save_history(&history, &path).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries[0].job_id, "J-100");
        assert_eq!(loaded.entries[0].breakdown.fmj_port_time, Some(45.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_path("atomic");
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");

        save_history(&CalculationHistory::new(), &path).unwrap();
        assert!(!PathBuf::from(tmp_name).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_creates_and_prepends() {
        let path = temp_path("append");
        let _ = fs::remove_file(&path);

        let (job, b) = sample();
        let first = append_to_history(&path, "op", "J-1", "A", job, b).unwrap();
        let (job, b) = sample();
        let second = append_to_history(&path, "op", "J-2", "B", job, b).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries[0].id, second);
        assert_eq!(loaded.entries[1].id, first);
        assert!(!lock_path_for(&path).exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        assert!(load_or_create_history(&path).unwrap().is_empty());
        assert!(matches!(load_history(&path), Err(CalcError::FileError { .. })));
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_path("lock");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "op@shop").unwrap();
        assert_eq!(lock.info.user_id, "op@shop");
        assert_eq!(lock.target_path(), path.as_path());
        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_leftover_lock_file_is_taken_over() {
        let path = temp_path("leftover_lock");
        let lock_path = lock_path_for(&path);
        let dead = LockInfo {
            user_id: "crashed".to_string(),
            machine: "unknown".to_string(),
            pid: 999_999,
            locked_at: Utc::now(),
        };
        fs::write(&lock_path, serde_json::to_string(&dead).unwrap()).unwrap();

        let lock = FileLock::acquire(&path, "op@shop").unwrap();
        let written = read_lock_info(&lock_path).unwrap();
        assert_eq!(written.user_id, "op@shop");
        assert_eq!(written.pid, std::process::id());

        drop(lock);
        assert!(!lock_path.exists());
    }

    #[test]
    fn test_held_lock_rejects_second_writer() {
        let path = temp_path("held_lock");
        let lock_path = lock_path_for(&path);
        let _ = fs::remove_file(&lock_path);

        let held = FileLock::acquire(&path, "first@shop").unwrap();
        let err = match FileLock::acquire(&path, "second@shop") {
            Err(e) => e,
            Ok(_) => panic!("second acquire should fail while the lock is held"),
        };
        match err {
            CalcError::FileLocked { locked_by, .. } => assert!(locked_by.starts_with("first@shop")),
            other => panic!("unexpected error: {:?}", other),
        }
        // the holder's metadata survives the failed attempt
        assert_eq!(read_lock_info(&lock_path).unwrap().user_id, "first@shop");

        drop(held);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_settings() {
        let path = temp_path("settings");
        fs::write(
            &path,
            r#"{ "custom_time_policy": "Apply", "resolve_policy": "Strict" }"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.custom_time_policy, CustomTimePolicy::Apply);
        assert_eq!(settings.resolve_policy, ResolvePolicy::Strict);
        assert_eq!(settings.time_constants.setup_time_per_operation, 5.0);

        fs::write(&path, r#"{ "time_constants": { "setup_time_per_operation": -5 } }"#).unwrap();
        assert!(load_settings(&path).is_err());

        let _ = fs::remove_file(&path);
    }
}
