mod helpers;

use anyhow::Result;
use helpers::TestBackend;
use notekeep::application::DataClient;

#[test]
fn given_fresh_backend_when_listing_then_returns_empty_set() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act
    let outcome = backend.list_notes()?;

    // Assert
    assert!(!outcome.has_errors());
    assert!(outcome.data.expect("Data should be present").is_empty());
    Ok(())
}

#[test]
fn given_created_note_when_listing_then_fields_round_trip_exactly() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act
    let created = backend
        .create_note("Groceries", "milk, eggs", None)?
        .data
        .expect("Create should return the note");
    let notes = backend.list_notes()?.data.expect("Data should be present");

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, created.id);
    assert_eq!(notes[0].name, "Groceries");
    assert_eq!(notes[0].description, "milk, eggs");
    assert_eq!(notes[0].image, None);
    Ok(())
}

#[test]
fn given_empty_name_when_creating_then_record_is_accepted() -> Result<()> {
    // Arrange: no validation anywhere, the empty string is a legal name.
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act
    let outcome = backend.create_note("", "", None)?;

    // Assert
    assert!(!outcome.has_errors());
    assert_eq!(outcome.data.expect("Data should be present").name, "");
    Ok(())
}

#[test]
fn given_two_creates_when_comparing_ids_then_ids_are_unique() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act
    let first = backend.create_note("A", "", None)?.data.unwrap();
    let second = backend.create_note("A", "", None)?.data.unwrap();

    // Assert
    assert_ne!(first.id, second.id);
    Ok(())
}

#[test]
fn given_image_key_when_creating_then_reference_is_stored_verbatim() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act: the key is stored as a plain reference, no blob is written.
    let created = backend
        .create_note("Cat", "", Some("cat.png"))?
        .data
        .unwrap();

    // Assert
    assert_eq!(created.image, Some("cat.png".to_string()));
    assert!(!backend.media_dir().join("cat.png").exists());
    Ok(())
}

#[test]
fn given_existing_note_when_deleting_then_only_that_id_is_removed() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;
    let doomed = backend.create_note("Doomed", "", None)?.data.unwrap();
    let survivor = backend.create_note("Survivor", "", None)?.data.unwrap();

    // Act
    let outcome = backend.delete_note(&doomed.id)?;

    // Assert
    assert!(!outcome.has_errors());
    let notes = backend.list_notes()?.data.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, survivor.id);
    Ok(())
}

#[test]
fn given_unknown_id_when_deleting_then_outcome_reports_error_and_nothing_changes() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;
    backend.create_note("Keep me", "", None)?;

    // Act
    let outcome = backend.delete_note("no-such-id")?;

    // Assert
    assert!(outcome.has_errors());
    assert_eq!(backend.list_notes()?.data.unwrap().len(), 1);
    Ok(())
}

#[test]
fn given_deleted_note_when_deleting_again_then_second_call_reports_error() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;
    let note = backend.create_note("Once", "", None)?.data.unwrap();

    // Act
    let first = backend.delete_note(&note.id)?;
    let second = backend.delete_note(&note.id)?;

    // Assert
    assert!(!first.has_errors());
    assert!(second.has_errors());
    assert!(backend.list_notes()?.data.unwrap().is_empty());
    Ok(())
}

#[test]
fn given_note_with_image_when_deleting_then_blob_survives() -> Result<()> {
    // Arrange: note and blob lifecycles are deliberately unlinked.
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;
    let source = fixture.write_image("cat.png")?;
    let note = backend.create_note("Cat", "", Some("cat.png"))?.data.unwrap();
    backend.put_blob("cat.png", &source)?;

    // Act
    backend.delete_note(&note.id)?;

    // Assert
    assert!(backend.media_dir().join("cat.png").exists());
    Ok(())
}

#[test]
fn given_local_file_when_putting_blob_then_bytes_land_in_media_dir() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;
    let source = fixture.write_image("cat.png")?;

    // Act
    let outcome = backend.put_blob("cat.png", &source)?;

    // Assert
    assert!(!outcome.has_errors());
    let stored = backend.media_dir().join("cat.png");
    assert_eq!(std::fs::read(&stored)?, std::fs::read(&source)?);
    Ok(())
}

#[test]
fn given_missing_source_file_when_putting_blob_then_outcome_reports_error() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let mut backend = fixture.open()?;

    // Act
    let outcome = backend.put_blob("ghost.png", std::path::Path::new("/nonexistent/ghost.png"))?;

    // Assert
    assert!(outcome.has_errors());
    assert!(!backend.media_dir().join("ghost.png").exists());
    Ok(())
}

#[test]
fn given_any_key_when_deriving_blob_url_then_url_is_derived_without_checking() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let backend = fixture.open()?;

    // Act: nothing was uploaded, the dangling key still yields a URL.
    let url = backend.blob_url("dangling.png");

    // Assert
    assert!(url.starts_with("file://"));
    assert!(url.ends_with("/dangling.png"));
    Ok(())
}

#[test]
fn given_reopened_backend_when_listing_then_notes_persist() -> Result<()> {
    // Arrange
    let fixture = TestBackend::new()?;
    let created = {
        let mut backend = fixture.open()?;
        backend.create_note("Durable", "still here", None)?.data.unwrap()
    };

    // Act
    let mut reopened = fixture.open()?;
    let notes = reopened.list_notes()?.data.unwrap();

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, created.id);
    assert_eq!(notes[0].description, "still here");
    Ok(())
}
