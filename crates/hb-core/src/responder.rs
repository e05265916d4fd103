//! Rule-based canned replies.

use std::sync::Mutex;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{errors::Error, ports::Responder, Result};

const SILENT_REPLY: &str = "Well, you're awfully silent...";

const FALLBACK_REPLIES: &[&str] = &[
    "I do not understand...",
    "What are you talking about?",
    "Do you mind rephrasing that?",
];

/// Keyword-driven responder. Rules are matched in order on the lowercased input.
pub struct CannedResponder {
    rng: Mutex<StdRng>,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic dice rolls and fallback picks (tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::Responder("rng lock poisoned".to_string()))?;
        Ok(f(&mut rng))
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for CannedResponder {
    fn respond(&self, text: &str) -> Result<String> {
        let lowered = text.to_lowercase();

        if lowered.is_empty() {
            return Ok(SILENT_REPLY.to_string());
        }
        if lowered.contains("hello") {
            return Ok("Hello there!".to_string());
        }
        if lowered.contains("how are you") {
            return Ok("Good, thanks!".to_string());
        }
        if lowered.contains("bye") {
            return Ok("See you!".to_string());
        }
        if lowered.contains("roll dice") {
            let n = self.with_rng(|rng| rng.gen_range(1..=6))?;
            return Ok(format!("You rolled: {n}"));
        }

        let pick = self.with_rng(|rng| FALLBACK_REPLIES.choose(rng).copied())?;
        Ok(pick.unwrap_or(FALLBACK_REPLIES[0]).to_string())
    }
}
