use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("catalog invalid: {0}")]
    CatalogInvalid(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error(
        "response set is missing {} judgment(s); first unanswered: {}",
        .0.len(),
        .0.first().map(String::as_str).unwrap_or("?")
    )]
    IncompleteResponses(Vec<String>),

    #[error("responses parse error: {0}")]
    ResponsesParse(String),

    #[error("responses file references unknown catalog entries: {0}")]
    UnknownResponses(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
