// src/infrastructure/backend.rs
use crate::application::{ApiError, ApiOutcome, DataClient};
use crate::constants::{MEDIA_DIR_NAME, NOTES_DB_FILE};
use crate::domain::{DomainError, Note};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Local stand-in for the managed backend: note records live in a SQLite
/// table, uploaded blobs in a `media/` directory keyed by file name. The two
/// stores stay separate on purpose; deleting a record never touches its blob.
pub struct LocalBackend {
    conn: Connection,
    media_dir: PathBuf,
}

impl LocalBackend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let dir = PathBuf::from(data_dir.as_ref());
        debug!(?dir, "Opening local backend");

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        let db_path = dir.join(NOTES_DB_FILE);
        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open note database {}", db_path.display()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT
            )",
            [],
        )
        .map_err(|e| DomainError::BackendError(format!("Failed to initialize note table: {e}")))?;

        let media_dir = dir.join(MEDIA_DIR_NAME);
        fs::create_dir_all(&media_dir)
            .with_context(|| format!("Failed to create media directory {}", media_dir.display()))?;

        info!(?dir, "Opened local backend");
        Ok(Self { conn, media_dir })
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}

impl DataClient for LocalBackend {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<ApiOutcome<Vec<Note>>, DomainError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, image FROM notes")
            .map_err(transport)?;
        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    image: row.get(3)?,
                })
            })
            .map_err(transport)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(transport)?;

        debug!(count = notes.len(), "Fetched notes");
        Ok(ApiOutcome::ok(notes))
    }

    #[instrument(level = "debug", skip(self))]
    fn create_note(
        &mut self,
        name: &str,
        description: &str,
        image_key: Option<&str>,
    ) -> Result<ApiOutcome<Note>, DomainError> {
        let note = Note {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image: image_key.map(str::to_string),
        };

        self.conn
            .execute(
                "INSERT INTO notes (id, name, description, image) VALUES (?1, ?2, ?3, ?4)",
                params![note.id, note.name, note.description, note.image],
            )
            .map_err(transport)?;

        info!(note_id = %note.id, "Created note record");
        Ok(ApiOutcome::ok(note))
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<ApiOutcome<()>, DomainError> {
        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .map_err(transport)?;

        if removed == 0 {
            // A missing record is reported in the outcome, not raised.
            return Ok(ApiOutcome::failed(vec![ApiError::new(format!(
                "No note found with id {id}"
            ))]));
        }

        info!(note_id = id, "Deleted note record");
        Ok(ApiOutcome::done())
    }

    #[instrument(level = "debug", skip(self))]
    fn put_blob(&mut self, key: &str, source: &Path) -> Result<ApiOutcome<()>, DomainError> {
        let target = self.media_dir.join(key);
        match fs::copy(source, &target) {
            Ok(bytes) => {
                info!(key, bytes, "Stored blob");
                Ok(ApiOutcome::done())
            }
            Err(e) => Ok(ApiOutcome::failed(vec![ApiError::new(format!(
                "Failed to store blob {key}: {e}"
            ))])),
        }
    }

    fn blob_url(&self, key: &str) -> String {
        format!("file://{}/{}", self.media_dir.display(), key)
    }
}

fn transport(err: rusqlite::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}
