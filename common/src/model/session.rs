//! What the server tells a client to present after a load or a rejected save.
//!
//! A `SessionView` is the full answer to `GET /api/configs/session`: which of
//! the three presentation states to show, the configuration to put in the
//! editor, the filename the editor is bound to (if any), the current store
//! listing for the selection controls, and any messages to surface.

use crate::model::configuration::Configuration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing loaded; the user picks between loading a stored file and starting new.
    ChooserShown,
    /// Editor holds a default configuration and no bound filename.
    FreshSession,
    /// Editor holds a stored configuration; saves overwrite the bound filename.
    LoadedSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Message {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: SessionState,
    pub configuration: Configuration,
    pub bound_filename: Option<String>,
    /// Store listing, most recently modified first.
    pub files: Vec<String>,
    pub messages: Vec<Message>,
}

impl SessionView {
    pub fn chooser(files: Vec<String>, messages: Vec<Message>) -> Self {
        SessionView {
            state: SessionState::ChooserShown,
            configuration: Configuration::new_default(),
            bound_filename: None,
            files,
            messages,
        }
    }

    pub fn fresh(files: Vec<String>, messages: Vec<Message>) -> Self {
        SessionView {
            state: SessionState::FreshSession,
            configuration: Configuration::new_default(),
            bound_filename: None,
            files,
            messages,
        }
    }

    pub fn loaded(
        configuration: Configuration,
        filename: String,
        files: Vec<String>,
        messages: Vec<Message>,
    ) -> Self {
        SessionView {
            state: SessionState::LoadedSession,
            configuration,
            bound_filename: Some(filename),
            files,
            messages,
        }
    }

    pub fn has_error(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
