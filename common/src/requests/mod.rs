use serde::{Deserialize, Serialize};

/// Query string of `GET /api/configs/session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadQuery {
    /// Stored filename to load. Only honoured if it is in the store listing.
    pub load_file: Option<String>,
    /// `true` forces the chooser and ignores `load_file`.
    pub clear: Option<String>,
    /// `true` starts a fresh configuration without showing the chooser.
    pub new: Option<String>,
    /// Message carried over from the redirect that follows a save.
    pub msg: Option<String>,
}

impl LoadQuery {
    pub fn is_clear(&self) -> bool {
        self.clear.as_deref() == Some("true")
    }

    pub fn is_new(&self) -> bool {
        self.new.as_deref() == Some("true")
    }

    pub fn requested_file(&self) -> Option<&str> {
        self.load_file.as_deref().filter(|f| !f.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// Write a new, timestamped file.
    Save,
    /// Replace a file that is already in the store.
    Overwrite,
}

impl SaveAction {
    pub fn parse(action: &str) -> Option<SaveAction> {
        match action {
            "save" => Some(SaveAction::Save),
            "overwrite" => Some(SaveAction::Overwrite),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SaveAction::Save => "save",
            SaveAction::Overwrite => "overwrite",
        }
    }
}

/// Form body of `POST /api/configs/session`.
///
/// Every field defaults to empty so that an incomplete form reaches the
/// controller and is rejected there with a readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub action: String,
    /// JSON text of the configuration being saved.
    #[serde(default)]
    pub config_payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite_filename: Option<String>,
}
