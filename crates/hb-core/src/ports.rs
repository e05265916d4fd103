use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Local reply generator.
///
/// Synchronous on purpose: implementations are expected to be cheap and pure
/// from the caller's point of view.
pub trait Responder: Send + Sync {
    fn respond(&self, text: &str) -> Result<String>;
}

/// One piece of source text submitted for translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText {
    #[serde(rename = "Text")]
    pub text: String,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A single translated unit inside a segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Translations produced for one [`SourceText`], one per target language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedSegment {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Remote translation backend.
///
/// An empty result is a valid answer and is not an error.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        segments: &[SourceText],
        from: &str,
        to: &[&str],
    ) -> Result<Vec<TranslatedSegment>>;
}
