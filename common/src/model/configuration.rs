use crate::error::ModelError;
use crate::model::language::Language;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name given to a configuration that has never been renamed.
pub const DEFAULT_CONFIG_NAME: &str = "Badge_Setup_1";

/// A named, timestamped set of badge groups, as stored on disk.
///
/// Stored documents are the pretty-printed JSON form of this struct:
///
/// ```json
/// {
///   "configName": "Spring_Sale",
///   "timestamp": "2025-03-01T10:15:00+01:00",
///   "groups": [ { "name": "...", "ids": "101\n102", "texts": { "en": "SALE", ... } } ]
/// }
/// ```
///
/// Only `configName` is mandatory when parsing, and any non-null value is
/// taken as its JSON text. Other fields that are missing, `null` or of the
/// wrong type fall back to their empty value so that documents written by
/// older front-ends still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(deserialize_with = "any_as_text")]
    pub config_name: String,
    /// RFC 3339 time of the last save. Empty until the configuration is saved.
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: String,
    /// Display and generation order.
    #[serde(default, deserialize_with = "lenient")]
    pub groups: Vec<Group>,
}

impl Configuration {
    /// The configuration a fresh editing session starts from: default name,
    /// one default group.
    pub fn new_default() -> Self {
        Configuration {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            timestamp: String::new(),
            groups: vec![Group::new_default(1)],
        }
    }

    /// Parses a save payload or a stored document.
    ///
    /// The text must be a JSON object with a non-null `configName`; that is the
    /// only structural requirement.
    pub fn parse_incoming(raw: &str) -> Result<Self, ModelError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ModelError::InvalidPayload(e.to_string()))?;
        if !value.is_object() {
            return Err(ModelError::InvalidPayload(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| ModelError::InvalidPayload(e.to_string()))
    }

    /// Guarantees the editing invariant of at least one group.
    pub fn normalized(mut self) -> Self {
        if self.groups.is_empty() {
            self.groups.push(Group::new_default(1));
        }
        self
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A bundle of product identifiers sharing one badge text per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    /// Raw newline-separated identifiers, exactly as typed.
    #[serde(default, deserialize_with = "lenient")]
    pub ids: String,
    #[serde(default, deserialize_with = "lenient")]
    pub texts: BadgeTexts,
}

impl Group {
    /// An empty group labelled by the 1-based position it was added at.
    pub fn new_default(position: usize) -> Self {
        Group {
            name: format!("New Group {}", position),
            ..Group::default()
        }
    }

    /// Identifiers from `ids`: one per line, trimmed, blank lines skipped.
    pub fn product_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids
            .split('\n')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Badge text for each supported language. Every language is always present,
/// possibly as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeTexts {
    #[serde(default, deserialize_with = "lenient")]
    pub en: String,
    #[serde(default, deserialize_with = "lenient")]
    pub de: String,
    #[serde(default, deserialize_with = "lenient")]
    pub fr: String,
    #[serde(default, deserialize_with = "lenient")]
    pub es: String,
    #[serde(default, deserialize_with = "lenient")]
    pub pl: String,
    #[serde(default, deserialize_with = "lenient")]
    pub nl: String,
    #[serde(default, deserialize_with = "lenient")]
    pub it: String,
}

impl BadgeTexts {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::De => &self.de,
            Language::Fr => &self.fr,
            Language::Es => &self.es,
            Language::Pl => &self.pl,
            Language::Nl => &self.nl,
            Language::It => &self.it,
        }
    }

    pub fn set(&mut self, lang: Language, text: impl Into<String>) {
        let slot = match lang {
            Language::En => &mut self.en,
            Language::De => &mut self.de,
            Language::Fr => &mut self.fr,
            Language::Es => &mut self.es,
            Language::Pl => &mut self.pl,
            Language::Nl => &mut self.nl,
            Language::It => &mut self.it,
        };
        *slot = text.into();
    }
}

/// Strings as they are, other non-null values as their JSON text.
fn any_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Err(D::Error::custom("configName must not be null")),
        Value::String(text) => Ok(text),
        other => Ok(other.to_string()),
    }
}

/// The value when it has the expected shape, the empty value otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
