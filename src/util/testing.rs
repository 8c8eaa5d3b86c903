// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{ApiError, ApiOutcome, DataClient};
use crate::domain::{DomainError, Note};

/// One recorded call against the mock, in issue order. Lets tests assert
/// call sequencing, e.g. that the record create precedes the blob upload.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List,
    Create {
        name: String,
        description: String,
        image_key: Option<String>,
    },
    Delete {
        id: String,
    },
    Put {
        key: String,
        source: PathBuf,
    },
}

enum CallBehavior {
    Ok,
    Rejected(Vec<ApiError>),
    Transport(String),
}

struct MockState {
    notes: Vec<Note>,
    next_id: u64,
    list_behavior: CallBehavior,
    create_behavior: CallBehavior,
    delete_behavior: CallBehavior,
    put_behavior: CallBehavior,
    calls: Vec<RecordedCall>,
}

impl MockState {
    fn assign_id(&mut self) -> String {
        let id = format!("note-{}", self.next_id);
        self.next_id += 1;
        id
    }
}

/// Shared stateful mock for use cases that depend on [`DataClient`].
///
/// The mock keeps an in-memory record set so create/delete/list behave like a
/// real backend, and records every call for sequencing assertions. Failure
/// injection covers both halves of the result-pair contract: rejected
/// outcomes (backend validation errors) and transport failures.
///
/// # Examples
///
/// ```
/// use notekeep::util::testing::MockDataClient;
/// use notekeep::application::DataClient;
///
/// let mut mock = MockDataClient::builder()
///     .with_seed_note("Groceries")
///     .build();
/// let handle = mock.handle();
///
/// let notes = mock.list_notes().unwrap().data.unwrap();
/// assert_eq!(notes.len(), 1);
/// assert_eq!(handle.calls().len(), 1);
/// ```
pub struct MockDataClient {
    state: Rc<RefCell<MockState>>,
}

impl MockDataClient {
    pub fn builder() -> MockDataClientBuilder {
        MockDataClientBuilder::new()
    }

    /// A handle onto the mock's shared state, usable after the mock itself
    /// has been moved into the unit under test.
    pub fn handle(&self) -> MockHandle {
        MockHandle {
            state: Rc::clone(&self.state),
        }
    }
}

impl CallBehavior {
    /// Short-circuit for the configured failure, if any.
    fn check<T>(&self) -> Result<Option<ApiOutcome<T>>, DomainError> {
        match self {
            CallBehavior::Ok => Ok(None),
            CallBehavior::Rejected(errors) => Ok(Some(ApiOutcome::failed(errors.clone()))),
            CallBehavior::Transport(message) => Err(DomainError::Transport(message.clone())),
        }
    }
}

impl DataClient for MockDataClient {
    fn list_notes(&mut self) -> Result<ApiOutcome<Vec<Note>>, DomainError> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.calls.push(RecordedCall::List);
        if let Some(outcome) = state.list_behavior.check()? {
            return Ok(outcome);
        }
        Ok(ApiOutcome::ok(state.notes.clone()))
    }

    fn create_note(
        &mut self,
        name: &str,
        description: &str,
        image_key: Option<&str>,
    ) -> Result<ApiOutcome<Note>, DomainError> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.calls.push(RecordedCall::Create {
            name: name.to_string(),
            description: description.to_string(),
            image_key: image_key.map(str::to_string),
        });
        if let Some(outcome) = state.create_behavior.check()? {
            return Ok(outcome);
        }
        let note = Note {
            id: state.assign_id(),
            name: name.to_string(),
            description: description.to_string(),
            image: image_key.map(str::to_string),
        };
        state.notes.push(note.clone());
        Ok(ApiOutcome::ok(note))
    }

    fn delete_note(&mut self, id: &str) -> Result<ApiOutcome<()>, DomainError> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.calls.push(RecordedCall::Delete { id: id.to_string() });
        if let Some(outcome) = state.delete_behavior.check()? {
            return Ok(outcome);
        }
        let before = state.notes.len();
        state.notes.retain(|note| note.id != id);
        if state.notes.len() == before {
            return Ok(ApiOutcome::failed(vec![ApiError::new(format!(
                "No note found with id {id}"
            ))]));
        }
        Ok(ApiOutcome::done())
    }

    fn put_blob(&mut self, key: &str, source: &Path) -> Result<ApiOutcome<()>, DomainError> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.calls.push(RecordedCall::Put {
            key: key.to_string(),
            source: source.to_path_buf(),
        });
        if let Some(outcome) = state.put_behavior.check()? {
            return Ok(outcome);
        }
        Ok(ApiOutcome::done())
    }

    fn blob_url(&self, key: &str) -> String {
        format!("mock://blobs/{key}")
    }
}

/// Read/mutate access to a [`MockDataClient`]'s shared state from inside a
/// test, after the mock was handed to the controller.
pub struct MockHandle {
    state: Rc<RefCell<MockState>>,
}

impl MockHandle {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.borrow().calls.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.borrow().notes.clone()
    }

    /// Make every subsequent list call fail at the transport level.
    pub fn fail_lists_with_transport_error(&self) {
        self.state.borrow_mut().list_behavior =
            CallBehavior::Transport("connection refused".to_string());
    }

    /// Make every subsequent list call return a rejected outcome.
    pub fn fail_lists_with_errors(&self, message: &str) {
        self.state.borrow_mut().list_behavior =
            CallBehavior::Rejected(vec![ApiError::new(message)]);
    }
}

/// Builder for [`MockDataClient`].
pub struct MockDataClientBuilder {
    notes: Vec<Note>,
    next_id: u64,
    list_behavior: CallBehavior,
    create_behavior: CallBehavior,
    delete_behavior: CallBehavior,
    put_behavior: CallBehavior,
}

impl MockDataClientBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            list_behavior: CallBehavior::Ok,
            create_behavior: CallBehavior::Ok,
            delete_behavior: CallBehavior::Ok,
            put_behavior: CallBehavior::Ok,
        }
    }

    /// Pre-populate the record set with a note (backend-assigned id, empty
    /// description, no image).
    pub fn with_seed_note(mut self, name: &str) -> Self {
        let id = format!("note-{}", self.next_id);
        self.next_id += 1;
        self.notes.push(Note {
            id,
            name: name.to_string(),
            description: String::new(),
            image: None,
        });
        self
    }

    /// Make create calls return a rejected outcome with the given message.
    pub fn with_create_rejected(mut self, message: &str) -> Self {
        self.create_behavior = CallBehavior::Rejected(vec![ApiError::new(message)]);
        self
    }

    /// Make create calls fail at the transport level.
    pub fn with_create_transport_failure(mut self) -> Self {
        self.create_behavior = CallBehavior::Transport("connection reset".to_string());
        self
    }

    /// Make delete calls fail at the transport level.
    pub fn with_delete_transport_failure(mut self) -> Self {
        self.delete_behavior = CallBehavior::Transport("connection reset".to_string());
        self
    }

    /// Make blob uploads return a rejected outcome with the given message.
    pub fn with_put_rejected(mut self, message: &str) -> Self {
        self.put_behavior = CallBehavior::Rejected(vec![ApiError::new(message)]);
        self
    }

    pub fn build(self) -> MockDataClient {
        MockDataClient {
            state: Rc::new(RefCell::new(MockState {
                notes: self.notes,
                next_id: self.next_id,
                list_behavior: self.list_behavior,
                create_behavior: self.create_behavior,
                delete_behavior: self.delete_behavior,
                put_behavior: self.put_behavior,
                calls: Vec::new(),
            })),
        }
    }
}

impl Default for MockDataClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Filter out chatty dependencies
    let noisy_modules = ["rusqlite", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
