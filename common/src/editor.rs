//! Client-side editing session.
//!
//! The editor owns the configuration being edited and, once it has been loaded
//! from or saved to the store, the filename it is bound to. The binding decides
//! how the next save is routed: a bound session always overwrites its file, an
//! unbound one always creates a new file and becomes bound to it.

use crate::error::ModelError;
use crate::model::configuration::{Configuration, Group};
use crate::model::session::{SessionState, SessionView};
use crate::naming::PLACEHOLDER_NAME;
use crate::requests::{SaveAction, SaveForm};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    configuration: Configuration,
    bound_filename: Option<String>,
    // Running count used to label new groups, never decremented.
    groups_added: usize,
}

impl EditorSession {
    pub fn fresh() -> Self {
        Self::with_configuration(Configuration::new_default(), None)
    }

    pub fn loaded(configuration: Configuration, filename: impl Into<String>) -> Self {
        Self::with_configuration(configuration, Some(filename.into()))
    }

    /// Picks up where the server left off. A chooser view starts unbound.
    pub fn from_view(view: &SessionView) -> Self {
        match (view.state, &view.bound_filename) {
            (SessionState::LoadedSession, Some(filename)) => {
                Self::loaded(view.configuration.clone(), filename.clone())
            }
            _ => Self::with_configuration(view.configuration.clone(), None),
        }
    }

    fn with_configuration(configuration: Configuration, bound_filename: Option<String>) -> Self {
        let configuration = configuration.normalized();
        let groups_added = configuration.groups.len();
        EditorSession {
            configuration,
            bound_filename,
            groups_added,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    pub fn bound_filename(&self) -> Option<&str> {
        self.bound_filename.as_deref()
    }

    pub fn add_group(&mut self) -> &mut Group {
        self.groups_added += 1;
        self.configuration
            .groups
            .push(Group::new_default(self.groups_added));
        let last = self.configuration.groups.len() - 1;
        &mut self.configuration.groups[last]
    }

    pub fn remove_group(&mut self, index: usize) -> Result<Group, ModelError> {
        if index >= self.configuration.groups.len() {
            return Err(ModelError::NoSuchGroup(index));
        }
        if self.configuration.groups.len() == 1 {
            return Err(ModelError::LastGroup);
        }
        Ok(self.configuration.groups.remove(index))
    }

    /// Builds the form for the next save and stamps the configuration time.
    ///
    /// Bound sessions overwrite their file whatever the name field says; only
    /// an empty name is replaced by the placeholder. New files need a
    /// non-blank name.
    pub fn save_request<Tz>(&self, now: &DateTime<Tz>) -> Result<SaveForm, ModelError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut configuration = self.configuration.clone();
        configuration.timestamp = now.to_rfc3339();

        let (action, overwrite_filename) = match &self.bound_filename {
            Some(filename) => {
                if configuration.config_name.is_empty() {
                    configuration.config_name = PLACEHOLDER_NAME.to_string();
                }
                (SaveAction::Overwrite, Some(filename.clone()))
            }
            None => {
                let name = configuration.config_name.trim();
                if name.is_empty() {
                    return Err(ModelError::MissingName);
                }
                configuration.config_name = name.to_string();
                (SaveAction::Save, None)
            }
        };

        let config_payload = serde_json::to_string(&configuration)
            .map_err(|e| ModelError::InvalidPayload(e.to_string()))?;

        Ok(SaveForm {
            action: action.as_str().to_string(),
            config_payload,
            overwrite_filename,
        })
    }

    /// Binds the session to the file a save just wrote.
    pub fn bind(&mut self, filename: impl Into<String>) {
        self.bound_filename = Some(filename.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::language::Language;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn fresh_session_creates_then_overwrites_after_binding() {
        let mut session = EditorSession::fresh();
        session.configuration_mut().config_name = "  Summer Promo ".to_string();

        let first = session.save_request(&now()).unwrap();
        assert_eq!(first.action, "save");
        assert!(first.overwrite_filename.is_none());
        let sent = Configuration::parse_incoming(&first.config_payload).unwrap();
        assert_eq!(sent.config_name, "Summer Promo");
        assert_eq!(sent.timestamp, now().to_rfc3339());

        session.bind("SummerPromo_20250504_120000.json");
        session.configuration_mut().config_name = "Renamed".to_string();

        let second = session.save_request(&now()).unwrap();
        assert_eq!(second.action, "overwrite");
        assert_eq!(
            second.overwrite_filename.as_deref(),
            Some("SummerPromo_20250504_120000.json")
        );
    }

    #[test]
    fn blank_name_blocks_a_create_but_not_an_overwrite() {
        let mut fresh = EditorSession::fresh();
        fresh.configuration_mut().config_name = "   ".to_string();
        assert_eq!(fresh.save_request(&now()), Err(ModelError::MissingName));

        let mut loaded = EditorSession::loaded(Configuration::new_default(), "a.json");
        loaded.configuration_mut().config_name = String::new();
        let form = loaded.save_request(&now()).unwrap();
        let sent = Configuration::parse_incoming(&form.config_payload).unwrap();
        assert_eq!(sent.config_name, PLACEHOLDER_NAME);

        loaded.configuration_mut().config_name = "  ".to_string();
        let form = loaded.save_request(&now()).unwrap();
        let sent = Configuration::parse_incoming(&form.config_payload).unwrap();
        assert_eq!(sent.config_name, "  ");
    }

    #[test]
    fn last_group_cannot_be_removed() {
        let mut session = EditorSession::fresh();
        assert_eq!(session.remove_group(0), Err(ModelError::LastGroup));

        session.add_group().texts.set(Language::Fr, "PROMO");
        assert_eq!(session.configuration().groups.len(), 2);
        assert_eq!(session.configuration().groups[1].name, "New Group 2");

        let removed = session.remove_group(0).unwrap();
        assert_eq!(removed.name, "New Group 1");
        assert_eq!(session.remove_group(3), Err(ModelError::NoSuchGroup(3)));
        assert_eq!(session.remove_group(0), Err(ModelError::LastGroup));
    }

    #[test]
    fn group_labels_keep_counting_after_removal() {
        let mut session = EditorSession::fresh();
        session.add_group();
        session.remove_group(1).unwrap();
        assert_eq!(session.add_group().name, "New Group 3");
    }

    #[test]
    fn chooser_view_starts_unbound() {
        let view = SessionView::chooser(vec!["a.json".to_string()], vec![]);
        let session = EditorSession::from_view(&view);
        assert!(session.bound_filename().is_none());

        let loaded = SessionView::loaded(
            Configuration::new_default(),
            "a.json".to_string(),
            vec!["a.json".to_string()],
            vec![],
        );
        assert_eq!(EditorSession::from_view(&loaded).bound_filename(), Some("a.json"));
    }
}
