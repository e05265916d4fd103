//! Cross-messenger abstractions (Telegram today; other platforms behind the same port).

pub mod port;
pub mod types;
