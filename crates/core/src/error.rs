use thiserror::Error;

/// Issue payload rejected before it reaches the store.
///
/// `field` names the offending JSON field when one can be identified;
/// it is `None` for body-level problems (malformed JSON, non-object body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self { field: Some(field.to_owned()), message: message.into() }
    }

    pub fn body(message: impl Into<String>) -> Self {
        Self { field: None, message: message.into() }
    }

    fn describe(&self) -> String {
        match self.field {
            Some(ref field) => format!("{field}: {}", self.message),
            None => self.message.clone(),
        }
    }
}

/// Unknown tab name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected all, company or union)")]
pub struct ParseTabError(pub String);

/// Startup configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
