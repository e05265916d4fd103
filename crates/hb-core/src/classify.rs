//! Inbound text classification.
//!
//! Decides where a reply goes and which producer writes it. Pure and total.

/// Literal command prefix for translation requests (case-sensitive, one trailing space).
pub const TRANSLATE_PREFIX: &str = "!translate ";

/// Leading marker that asks for the reply to arrive as a direct message.
pub const PRIVATE_MARKER: char = '?';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Public,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Translate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingDecision {
    pub target: TargetKind,
    pub mode: Mode,
    pub payload: String,
}

/// Classify raw message text.
///
/// The translate prefix is only recognized at position 0 and wins over the
/// private marker, so a translate command always replies in the channel.
pub fn classify(raw_text: &str) -> RoutingDecision {
    if let Some(rest) = raw_text.strip_prefix(TRANSLATE_PREFIX) {
        return RoutingDecision {
            target: TargetKind::Public,
            mode: Mode::Translate,
            payload: rest.to_string(),
        };
    }

    if let Some(rest) = raw_text.strip_prefix(PRIVATE_MARKER) {
        return RoutingDecision {
            target: TargetKind::Private,
            mode: Mode::Plain,
            payload: rest.to_string(),
        };
    }

    RoutingDecision {
        target: TargetKind::Public,
        mode: Mode::Plain,
        payload: raw_text.to_string(),
    }
}
