use super::SessionController;
use crate::error::BadgeError;
use chrono::{DateTime, Local};
use common::model::configuration::Configuration;
use common::model::session::{Message, SessionState, SessionView};
use common::naming::{build_new_filename, sanitize_name_or_placeholder};
use common::requests::{SaveAction, SaveForm};
use log::{info, warn};

#[derive(Debug)]
pub enum SaveOutcome {
    /// The document was written; the client should reload it by `filename`.
    Saved { filename: String, message: String },
    /// Nothing was written. `view` is what the editor should show instead.
    Rejected { error: BadgeError, view: SessionView },
}

impl SessionController<'_> {
    /// Routes a save to a create or an overwrite and performs it.
    ///
    /// `save` always writes a new `{name}_{YYYYMMDD_HHMMSS}.json` file;
    /// `overwrite` only writes to a file in the current listing. The saved
    /// document carries `now` as its timestamp.
    pub fn save(&self, form: &SaveForm, now: DateTime<Local>) -> SaveOutcome {
        let parsed = Configuration::parse_incoming(&form.config_payload);
        match self.write(form, parsed.clone(), now) {
            Ok((filename, message)) => {
                info!("{}", message);
                SaveOutcome::Saved { filename, message }
            }
            Err(error) => {
                warn!("Save rejected: {}", error);
                let view = self.rejected_view(form, parsed.ok(), &error);
                SaveOutcome::Rejected { error, view }
            }
        }
    }

    fn write(
        &self,
        form: &SaveForm,
        parsed: Result<Configuration, common::error::ModelError>,
        now: DateTime<Local>,
    ) -> Result<(String, String), BadgeError> {
        self.store.ensure_directory()?;

        let mut configuration = parsed?;
        let action = SaveAction::parse(&form.action).ok_or_else(|| {
            BadgeError::InvalidPayload(format!("unsupported action '{}'", form.action))
        })?;

        configuration.timestamp = now.to_rfc3339();
        let content = configuration
            .to_pretty_json()
            .map_err(|e| BadgeError::InvalidPayload(e.to_string()))?;

        match action {
            SaveAction::Save => {
                let name = sanitize_name_or_placeholder(&configuration.config_name);
                let filename = build_new_filename(&name, &now);
                self.store.create_file(&filename, &content)?;
                let message = format!("Configuration saved successfully as {}!", filename);
                Ok((filename, message))
            }
            SaveAction::Overwrite => {
                let target = form.overwrite_filename.as_deref().unwrap_or_default();
                let filename = self.store.overwrite_file(target, &content)?;
                let message = format!("Configuration updated successfully in {}!", filename);
                Ok((filename, message))
            }
        }
    }

    /// Keeps the user's edits on screen, still bound to the file they were
    /// overwriting when that file is listed.
    fn rejected_view(
        &self,
        form: &SaveForm,
        submitted: Option<Configuration>,
        error: &BadgeError,
    ) -> SessionView {
        let files = self.store.list_files();
        let bound_filename = match SaveAction::parse(&form.action) {
            Some(SaveAction::Overwrite) => form
                .overwrite_filename
                .clone()
                .filter(|f| files.contains(f)),
            _ => None,
        };
        let state = if bound_filename.is_some() {
            SessionState::LoadedSession
        } else {
            SessionState::FreshSession
        };

        SessionView {
            state,
            configuration: submitted
                .map(Configuration::normalized)
                .unwrap_or_else(Configuration::new_default),
            bound_filename,
            files,
            messages: vec![Message::error(error.to_string())],
        }
    }
}
