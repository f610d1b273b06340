#[derive(Debug, thiserror::Error)]
pub enum DeckDiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckDiffError>;

/// Non-fatal degradations recorded while parsing a deck list.
///
/// Parsing never fails; these only describe where the parser had to guess.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    #[error("line {line}: malformed line {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}
