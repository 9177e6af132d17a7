use std::collections::BTreeMap;
use std::fmt;

/// One quiz entry: a source word, the answers accepted for it and any
/// grammatical detail shown after a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub translations: Vec<String>,
    pub grammar: Vec<GrammarEntry>,
}

impl WordRecord {
    /// Whether `answer` matches one of the translations once both sides are
    /// trimmed and lowercased. A blank answer never matches.
    pub fn accepts(&self, answer: &str) -> bool {
        let answer = normalize(answer);
        if answer.is_empty() {
            return false;
        }
        self.translations
            .iter()
            .any(|translation| normalize(translation) == answer)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarEntry {
    Noun(GrammarDetail),
    Verb(VerbDetail),
}

impl GrammarEntry {
    pub fn kind(&self) -> PartOfSpeech {
        match self {
            GrammarEntry::Noun(_) => PartOfSpeech::Noun,
            GrammarEntry::Verb(_) => PartOfSpeech::Verb,
        }
    }

    pub fn detail(&self) -> &GrammarDetail {
        match self {
            GrammarEntry::Noun(detail) => detail,
            GrammarEntry::Verb(verb) => &verb.detail,
        }
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarDetail {
    pub primary_translation: String,
    pub translations: Vec<String>,
    pub synonyms: BTreeMap<String, String>,
    pub antonyms: BTreeMap<String, String>,
    pub examples: BTreeMap<String, String>,
    pub frequency: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbDetail {
    pub detail: GrammarDetail,
    pub irregular: bool,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartOfSpeech::Noun => f.write_str("Noun"),
            PartOfSpeech::Verb => f.write_str("Verb"),
        }
    }
}
