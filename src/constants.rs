// src/constants.rs
//
// Application-wide constants for file and directory layout.

/// File name of the SQLite database holding note records.
///
/// Lives directly under the backend data directory.
///
/// Used in: `infrastructure/backend.rs`
pub const NOTES_DB_FILE: &str = "notes.db";

/// Directory under the backend data directory where uploaded blobs are
/// stored, keyed by file name. The blob store exposes no list and no delete;
/// orphaned files accumulate here when their notes are removed.
///
/// Used in: `infrastructure/backend.rs`
pub const MEDIA_DIR_NAME: &str = "media";

/// File name of the TOML configuration descriptor under the platform config
/// directory.
///
/// Used in: `lib.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the platform config and data directories.
///
/// Used in: `lib.rs`
pub const APP_DIR_NAME: &str = "notekeep";
