//! # Badge JSON Generator
//!
//! Turns one configuration into seven product → badge mappings, one per
//! language, ready to be copied into the storefront.
//!
//! For each language, groups are visited in configuration order. A group with
//! an empty text for that language is skipped. Otherwise every identifier in
//! its `ids` field maps to `{ "badgeStyle": "custom", "badgeText": <text> }`.
//! When two groups list the same identifier, the later group wins.
//!
//! Identifiers are written in the order the storefront's JavaScript lists
//! object keys: array-index-like ids (`"7"`, `"101"`) ascending by value, then
//! every other id in first-seen order.

use crate::model::configuration::Configuration;
use crate::model::language::Language;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

pub const CUSTOM_BADGE_STYLE: &str = "custom";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDescriptor {
    pub badge_style: String,
    pub badge_text: String,
}

impl BadgeDescriptor {
    pub fn custom(text: &str) -> Self {
        BadgeDescriptor {
            badge_style: CUSTOM_BADGE_STYLE.to_string(),
            badge_text: text.to_string(),
        }
    }
}

/// Product identifier → badge for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductBadges {
    entries: Vec<(String, BadgeDescriptor)>,
    positions: HashMap<String, usize>,
}

impl ProductBadges {
    /// Sets the badge of `id`. A known id keeps its place.
    pub fn insert(&mut self, id: &str, badge: BadgeDescriptor) {
        match self.positions.get(id) {
            Some(&position) => self.entries[position].1 = badge,
            None => {
                self.positions.insert(id.to_string(), self.entries.len());
                self.entries.push((id.to_string(), badge));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&BadgeDescriptor> {
        self.positions.get(id).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BadgeDescriptor)> {
        let mut indexed: Vec<(u32, usize)> = Vec::new();
        let mut named: Vec<usize> = Vec::new();
        for (position, (id, _)) in self.entries.iter().enumerate() {
            match array_index(id) {
                Some(index) => indexed.push((index, position)),
                None => named.push(position),
            }
        }
        indexed.sort_unstable();

        indexed
            .into_iter()
            .map(|(_, position)| position)
            .chain(named)
            .map(move |position| {
                let (id, badge) = &self.entries[position];
                (id.as_str(), badge)
            })
    }
}

impl Serialize for ProductBadges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// `Some(n)` when `id` is the canonical decimal form of an array index.
fn array_index(id: &str) -> Option<u32> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if id.len() > 1 && id.starts_with('0') {
        return None;
    }
    id.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Generated output for all languages. Serializes as an object keyed by
/// language code, with every language present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageBadges(BTreeMap<Language, ProductBadges>);

impl LanguageBadges {
    pub fn for_language(&self, lang: Language) -> Option<&ProductBadges> {
        self.0.get(&lang)
    }

    pub fn product_count(&self, lang: Language) -> usize {
        self.for_language(lang).map_or(0, ProductBadges::len)
    }

    /// Four-space indented JSON of one language's mapping, as pasted into the
    /// storefront.
    pub fn to_pretty_json(&self, lang: Language) -> Result<String, serde_json::Error> {
        let empty = ProductBadges::default();
        let products = self.for_language(lang).unwrap_or(&empty);

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        products.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &ProductBadges)> {
        self.0.iter().map(|(lang, products)| (*lang, products))
    }
}

pub fn generate(configuration: &Configuration) -> LanguageBadges {
    let mut output = BTreeMap::new();
    for lang in Language::ALL {
        let mut products = ProductBadges::default();
        for group in &configuration.groups {
            let text = group.texts.get(lang);
            if text.is_empty() {
                continue;
            }
            for id in group.product_ids() {
                products.insert(id, BadgeDescriptor::custom(text));
            }
        }
        output.insert(lang, products);
    }
    LanguageBadges(output)
}
