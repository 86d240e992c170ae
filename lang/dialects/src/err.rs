use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialectError {
    #[error("dialect {dialect} already allows unquotes")]
    UnquotesAlreadyAllowed { dialect: String },
    #[error("unknown dialect `{0}`")]
    UnknownDialect(String),
    #[error("malformed dialect configuration: {0}")]
    Conf(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DialectError>;
