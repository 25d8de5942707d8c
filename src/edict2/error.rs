use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key field is empty")]
    Empty,
    #[error("unexpected {found:?} at char {position} while in {state} state")]
    UnexpectedChar {
        found: char,
        position: usize,
        state: &'static str,
    },
    #[error("key field ended in {state} state")]
    UnexpectedEnd { state: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlossError {
    #[error("unexpected {found:?} at char {position} after a closed tag (expecting space)")]
    UnexpectedAfterTag { found: char, position: usize },
    #[error("gloss ended inside an unterminated tag {tag:?}")]
    UnterminatedTag { tag: String },
    #[error("gloss ended in {state} state instead of definition text")]
    NoDefinition { state: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("last component should be blank, but is {0:?}")]
    MissingTrailingSeparator(String),
    #[error("expected key, gloss and sequence fields, but found {0} field(s)")]
    MissingFields(usize),
    #[error("malformed key field {key:?}: {source}")]
    MalformedKeyField {
        key: String,
        #[source]
        source: KeyError,
    },
    #[error("malformed gloss field {gloss:?}: {source}")]
    MalformedGlossField {
        gloss: String,
        #[source]
        source: GlossError,
    },
    #[error("unexpected cross-reference in entry-wide section: {0:?}")]
    UnexpectedCrossReferenceInGlobalScope(Vec<String>),
    #[error("line has no definitions")]
    NoDefinitions,
}

#[derive(Debug, Error)]
pub enum Edict2Error {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
    #[error("past end of input (line {line}): {source}")]
    EndOfInput {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl Edict2Error {
    pub fn line(&self) -> usize {
        match self {
            Edict2Error::Line { line, .. } | Edict2Error::EndOfInput { line, .. } => *line,
        }
    }
}
