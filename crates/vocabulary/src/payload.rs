use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::vocabulary::{GrammarDetail, GrammarEntry, VerbDetail, WordRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct RawWordRecord {
    word: String,
    #[serde(deserialize_with = "null_as_default")]
    translations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    types: Vec<RawType>,
}

/// A `types` element. The payload marks the part of speech by which key is
/// present, and nothing stops an element from carrying both.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawType {
    noun: Option<RawDetail>,
    verb: Option<RawDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDetail {
    #[serde(deserialize_with = "null_as_default")]
    translation: String,
    #[serde(deserialize_with = "null_as_default")]
    translations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    synonyms: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    antonyms: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    examples: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    frequency: i64,
    /// Only meaningful under `verb`.
    #[serde(deserialize_with = "null_as_default")]
    irregular: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RawDetail> for GrammarDetail {
    fn from(raw: RawDetail) -> Self {
        Self {
            primary_translation: raw.translation,
            translations: raw.translations,
            synonyms: raw.synonyms,
            antonyms: raw.antonyms,
            examples: raw.examples,
            frequency: raw.frequency,
        }
    }
}

impl From<RawWordRecord> for WordRecord {
    fn from(raw: RawWordRecord) -> Self {
        let grammar = raw
            .types
            .into_iter()
            .flat_map(|kind| {
                let noun = kind.noun.map(|noun| GrammarEntry::Noun(noun.into()));
                let verb = kind.verb.map(|verb| {
                    GrammarEntry::Verb(VerbDetail {
                        irregular: verb.irregular,
                        detail: verb.into(),
                    })
                });
                noun.into_iter().chain(verb)
            })
            .collect();
        Self {
            word: raw.word,
            translations: raw.translations,
            grammar,
        }
    }
}
