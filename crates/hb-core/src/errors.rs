/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the dispatch
/// layer can apply one policy per collaborator (suppress vs propagate).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("responder error: {0}")]
    Responder(String),

    #[error("translation error: {0}")]
    Translate(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
