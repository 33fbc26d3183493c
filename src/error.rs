//! Library error type.

/// Highest index the namer can turn into a letter (`Z`).
pub const MAX_PARAM_INDEX: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested maximum arity cannot be generated.
    #[error("invalid max arity {max_arity}: must be at most {limit}")]
    InvalidArity { max_arity: usize, limit: usize },

    /// Only `A..=Z` are available as parameter names.
    #[error("cannot name parameter #{index}: only {} single-letter names exist", MAX_PARAM_INDEX + 1)]
    UnsupportedParameterCount { index: usize },

    #[error("invalid parameter range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    /// A fixed type parameter (e.g. the return type) shadows a generated one.
    #[error("type parameter `{name}` collides with a generated parameter name")]
    ReservedNameCollision { name: String },

    #[error("template `{template}` references unknown placeholder `{{{{{name}}}}}`")]
    UnknownPlaceholder { template: &'static str, name: String },

    /// Template config could not be read or deserialized.
    #[error("config {path}: {message}")]
    Config { path: String, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
