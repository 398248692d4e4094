use thiserror::Error;

/// Top-level error type used across the entire workspace.
///
/// Note that none of the public theming functions surface this type — every
/// resolution failure is absorbed into the default color before it reaches a
/// caller.  Only the raw calendar pass-through returns it.
#[derive(Debug, Error)]
pub enum LiturgyError {
    #[error("calendar error: {0}")]
    Calendar(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = LiturgyError> = std::result::Result<T, E>;
