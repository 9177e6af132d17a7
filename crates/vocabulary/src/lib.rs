use payload::RawWordRecord;
use thiserror::Error;

mod payload;
mod vocabulary;

pub use vocabulary::{GrammarDetail, GrammarEntry, PartOfSpeech, VerbDetail, WordRecord};

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("malformed word list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decodes a JSON word list, keeping the records in payload order.
/// Either every record decodes or the whole load fails.
pub fn load(payload: &[u8]) -> Result<Vec<WordRecord>, VocabularyError> {
    let raw: Vec<RawWordRecord> = serde_json::from_slice(payload)?;
    let records: Vec<WordRecord> = raw.into_iter().map(WordRecord::from).collect();
    tracing::debug!(count = records.len(), "decoded word list");
    Ok(records)
}
