use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown {field} '{value}'")]
    UnknownCategory { field: &'static str, value: String },
}
