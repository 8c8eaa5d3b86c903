// src/domain/identity.rs

/// Resolved session user, supplied by the authentication wrapper before the
/// controller is constructed. Injected as a plain value, never read from
/// ambient global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub display_name: String,
}

impl Identity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}
