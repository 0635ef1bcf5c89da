// src/domain/view.rs

use crate::errors::ServiceError;

/// Who is looking at a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Just saved the listing in this session; may go back and edit.
    Creator,
    /// Arrived through a share link. Read-only, no way back to the form.
    Shared,
}

/// A message shown above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Dismissible notices also hide themselves after a few seconds.
    /// The rest stay until the next action.
    pub dismissible: bool,
}

impl Notice {
    pub fn dismissible(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismissible: true,
        }
    }

    pub fn persistent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismissible: false,
        }
    }
}

/// Top-level page state.
///
/// `Loading` only exists while a share link is being resolved. `Form` reaches
/// `Preview` through a successful save, and only a `Creator` preview can go
/// back to `Form`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Form { notice: Option<Notice> },
    Preview { mode: PreviewMode },
}

impl ViewState {
    /// State for a fresh page load.
    pub fn initial(has_identifier: bool) -> Self {
        if has_identifier {
            ViewState::Loading
        } else {
            ViewState::Form { notice: None }
        }
    }

    /// Applies the outcome of resolving a share link.
    pub fn on_resolved<T>(self, outcome: &Result<T, ServiceError>) -> Self {
        match (self, outcome) {
            (ViewState::Loading, Ok(_)) => ViewState::Preview {
                mode: PreviewMode::Shared,
            },
            (ViewState::Loading, Err(err)) => ViewState::Form {
                notice: Some(Notice::dismissible(err.to_string())),
            },
            (state, _) => state,
        }
    }

    /// Applies the outcome of a save.
    pub fn on_saved<T>(self, outcome: &Result<T, ServiceError>) -> Self {
        match (self, outcome) {
            (ViewState::Form { .. }, Ok(_)) => ViewState::Preview {
                mode: PreviewMode::Creator,
            },
            (ViewState::Form { .. }, Err(err)) => ViewState::Form {
                notice: Some(Notice::persistent(err.to_string())),
            },
            (state, _) => state,
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(
            self,
            ViewState::Preview {
                mode: PreviewMode::Creator
            }
        )
    }

    /// Goes back to the form. Shared previews stay where they are.
    pub fn request_edit(self) -> Self {
        if self.can_edit() {
            ViewState::Form { notice: None }
        } else {
            self
        }
    }
}
