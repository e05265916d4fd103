//! Hand-written port fakes shared by the core unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::{ChannelId, UserId},
    errors::Error,
    messaging::{port::ChatGateway, types::OutboundReply},
    ports::{Responder, SourceText, TranslatedSegment, Translator},
    Result,
};

#[derive(Default)]
pub(crate) struct FakeGateway {
    sent: Mutex<Vec<OutboundReply>>,
    fail: AtomicBool,
}

impl FakeGateway {
    pub(crate) fn sent(&self) -> Vec<OutboundReply> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn record(&self, reply: OutboundReply) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Gateway("send rejected".to_string()));
        }
        self.sent.lock().unwrap().push(reply);
        Ok(())
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn send_to_channel(&self, channel: ChannelId, text: &str) -> Result<()> {
        self.record(OutboundReply::to_channel(channel, text))
    }

    async fn send_direct(&self, user: UserId, text: &str) -> Result<()> {
        self.record(OutboundReply::direct(user, text))
    }
}

pub(crate) struct FakeResponder {
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeResponder {
    /// Replies with `echo: <text>`.
    pub(crate) fn echo() -> Self {
        Self {
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Responder for FakeResponder {
    fn respond(&self, text: &str) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.fail_on.as_deref() == Some(text) {
            return Err(Error::Responder(format!("cannot answer {text:?}")));
        }
        Ok(format!("echo: {text}"))
    }
}

type TranslateCall = (Vec<SourceText>, String, Vec<String>);

pub(crate) struct FakeTranslator {
    answer: std::result::Result<Vec<TranslatedSegment>, String>,
    calls: Mutex<Vec<TranslateCall>>,
}

impl FakeTranslator {
    pub(crate) fn answering(segments: Vec<TranslatedSegment>) -> Self {
        Self {
            answer: Ok(segments),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::answering(Vec::new())
    }

    pub(crate) fn failing(reason: &str) -> Self {
        Self {
            answer: Err(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<TranslateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        segments: &[SourceText],
        from: &str,
        to: &[&str],
    ) -> Result<Vec<TranslatedSegment>> {
        self.calls.lock().unwrap().push((
            segments.to_vec(),
            from.to_string(),
            to.iter().map(|s| s.to_string()).collect(),
        ));
        self.answer.clone().map_err(Error::Translate)
    }
}
