use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of languages a badge text can be written in.
///
/// Declaration order is the display and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    Es,
    Pl,
    Nl,
    It,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::Pl,
        Language::Nl,
        Language::It,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::Pl => "pl",
            Language::Nl => "nl",
            Language::It => "it",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_back_to_languages() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("pt"), None);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
        }
    }

    #[test]
    fn order_follows_declaration() {
        let mut shuffled = vec![Language::It, Language::En, Language::Pl, Language::De];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Language::En, Language::De, Language::Pl, Language::It]
        );
    }
}
