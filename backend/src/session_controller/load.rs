use super::SessionController;
use crate::error::BadgeError;
use common::model::configuration::Configuration;
use common::model::session::{Message, SessionView};
use common::requests::LoadQuery;
use log::{info, warn};

pub const NO_SAVED_CONFIGURATIONS: &str =
    "No saved configurations found on the server. Starting a new session.";
pub const SESSION_CLEARED: &str = "Session cleared. Choose to load or create new.";
pub const STARTING_NEW: &str = "Starting new configuration.";

impl SessionController<'_> {
    /// Decides what a `GET` presents.
    ///
    /// An empty store always gives a fresh session. Otherwise `clear` wins over
    /// `new`, which wins over `load_file`; with none of them the chooser is shown.
    pub fn resolve(&self, query: &LoadQuery) -> SessionView {
        let mut messages = Vec::new();
        if let Err(err) = self.store.ensure_directory() {
            messages.push(Message::error(err.to_string()));
        }

        let files = self.store.list_files();
        if files.is_empty() {
            messages.push(Message::info(NO_SAVED_CONFIGURATIONS));
            return SessionView::fresh(files, messages);
        }

        if query.is_clear() {
            messages.push(Message::info(SESSION_CLEARED));
            return SessionView::chooser(files, messages);
        }

        if query.is_new() {
            messages.push(Message::info(STARTING_NEW));
            return SessionView::fresh(files, messages);
        }

        let Some(requested) = query.requested_file() else {
            return SessionView::chooser(files, messages);
        };

        match self.load(requested) {
            Ok(configuration) => {
                info!("Loaded configuration {}", requested);
                if let Some(msg) = query.msg.as_deref().filter(|m| !m.is_empty()) {
                    messages.push(Message::info(msg));
                }
                SessionView::loaded(configuration, requested.to_string(), files, messages)
            }
            Err(err @ BadgeError::FileNotFound(_)) => {
                messages.push(Message::error(err.to_string()));
                SessionView::chooser(files, messages)
            }
            Err(err) => {
                warn!("Falling back to a fresh session: {}", err);
                messages.push(Message::error(err.to_string()));
                SessionView::fresh(files, messages)
            }
        }
    }

    fn load(&self, filename: &str) -> Result<Configuration, BadgeError> {
        let content = self.store.read_file(filename)?;
        Configuration::parse_incoming(&content)
            .map(Configuration::normalized)
            .map_err(|e| BadgeError::ReadFailure {
                filename: filename.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigStore;
    use common::model::session::{MessageLevel, SessionState};
    use std::fs;

    const STORED: &str = "Spring_20250301_101500.json";

    fn store_with_file() -> (tempfile::TempDir, ConfigStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("logs"));
        store.ensure_directory().unwrap();
        let body = r#"{"configName": "Spring", "timestamp": "", "groups": []}"#;
        fs::write(store.dir().join(STORED), body).unwrap();
        (temp_dir, store)
    }

    fn query(pairs: &[(&str, &str)]) -> LoadQuery {
        let mut query = LoadQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "load_file" => query.load_file = value,
                "clear" => query.clear = value,
                "new" => query.new = value,
                "msg" => query.msg = value,
                _ => unreachable!(),
            }
        }
        query
    }

    #[test]
    fn empty_store_goes_straight_to_fresh_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("logs"));
        let controller = SessionController::new(&store);

        for q in [query(&[]), query(&[("clear", "true")]), query(&[("load_file", STORED)])] {
            let view = controller.resolve(&q);
            assert_eq!(view.state, SessionState::FreshSession);
            assert_eq!(view.messages, vec![Message::info(NO_SAVED_CONFIGURATIONS)]);
        }
        assert!(store.dir().is_dir());
    }

    #[test]
    fn history_without_request_shows_chooser() {
        let (_temp_dir, store) = store_with_file();
        let view = SessionController::new(&store).resolve(&query(&[]));

        assert_eq!(view.state, SessionState::ChooserShown);
        assert_eq!(view.files, vec![STORED]);
        assert!(view.messages.is_empty());
    }

    #[test]
    fn listed_file_loads_and_binds() {
        let (_temp_dir, store) = store_with_file();
        let controller = SessionController::new(&store);
        let q = query(&[("load_file", STORED), ("msg", "Saved!")]);

        let view = controller.resolve(&q);
        assert_eq!(view.state, SessionState::LoadedSession);
        assert_eq!(view.bound_filename.as_deref(), Some(STORED));
        assert_eq!(view.configuration.config_name, "Spring");
        assert_eq!(view.configuration.groups.len(), 1);
        assert_eq!(view.messages, vec![Message::info("Saved!")]);

        assert_eq!(controller.resolve(&q), view);
    }

    #[test]
    fn clear_ignores_load_file() {
        let (_temp_dir, store) = store_with_file();
        let view = SessionController::new(&store)
            .resolve(&query(&[("clear", "true"), ("load_file", STORED)]));

        assert_eq!(view.state, SessionState::ChooserShown);
        assert!(view.bound_filename.is_none());
        assert_eq!(view.messages, vec![Message::info(SESSION_CLEARED)]);
    }

    #[test]
    fn new_starts_fresh_despite_history() {
        let (_temp_dir, store) = store_with_file();
        let view = SessionController::new(&store).resolve(&query(&[("new", "true")]));

        assert_eq!(view.state, SessionState::FreshSession);
        assert_eq!(view.configuration, Configuration::new_default());
        assert_eq!(view.files, vec![STORED]);
    }

    #[test]
    fn traversal_attempt_is_file_not_found() {
        let (_temp_dir, store) = store_with_file();
        let view = SessionController::new(&store)
            .resolve(&query(&[("load_file", "../../etc/passwd")]));

        assert_eq!(view.state, SessionState::ChooserShown);
        assert!(view.bound_filename.is_none());
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.messages[0].level, MessageLevel::Error);
        assert!(view.messages[0].text.contains("../../etc/passwd"));
    }

    #[test]
    fn malformed_file_falls_back_to_fresh_session() {
        let (_temp_dir, store) = store_with_file();
        fs::write(store.dir().join("Broken_20250301_101500.json"), "{ not json").unwrap();

        let view = SessionController::new(&store)
            .resolve(&query(&[("load_file", "Broken_20250301_101500.json")]));

        assert_eq!(view.state, SessionState::FreshSession);
        assert!(view.bound_filename.is_none());
        assert!(view.has_error());
        assert!(view.messages[0]
            .text
            .contains("Failed to read configuration file: Broken_20250301_101500.json"));
    }

    #[test]
    fn undecodable_file_falls_back_to_fresh_session() {
        let (_temp_dir, store) = store_with_file();
        let name = "Binary_20250301_101500.json";
        fs::write(store.dir().join(name), [0xff, 0xfe, 0x00]).unwrap();

        let view = SessionController::new(&store).resolve(&query(&[("load_file", name)]));

        assert_eq!(view.state, SessionState::FreshSession);
        assert!(view.bound_filename.is_none());
        assert_eq!(view.configuration, Configuration::new_default());
        assert_eq!(view.messages.len(), 1);
        assert!(view.messages[0].text.contains(name));
    }

    #[test]
    fn storage_failure_is_reported_and_session_starts_fresh() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = ConfigStore::new(blocker.join("logs"));

        let view = SessionController::new(&store).resolve(&query(&[]));
        assert_eq!(view.state, SessionState::FreshSession);
        assert_eq!(view.messages[0].level, MessageLevel::Error);
        assert_eq!(view.messages[1], Message::info(NO_SAVED_CONFIGURATIONS));
    }
}
