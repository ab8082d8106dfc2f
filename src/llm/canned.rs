use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_stream::iter;
use tracing::{debug, trace};

use super::config::ModelConfig;
use super::response::{Message, ModelResponse};
use super::{CallOptions, ChatModel, ChunkStream, Handle};

/// Fallback text returned when no responses are configured.
pub const DEFAULT_RESPONSE: &str = "Codex response";

/// Local chat provider that replays a fixed list of responses.
///
/// Each call returns the next entry in the list, wrapping around forever, so
/// the pipeline can run its model integration points deterministically and
/// offline. The cursor advances atomically, but two callers racing on the
/// same instance may observe responses out of list order; the provider is
/// meant for one caller at a time.
///
/// ```
/// use graphling::llm::canned::CannedChat;
/// use graphling::llm::{ChatModel, ModelConfig};
/// let model = CannedChat::new("stub", ModelConfig::default(), None);
/// let resp = model.chat("anything", &[], &Default::default()).unwrap();
/// assert_eq!(resp.content(), "Codex response");
/// ```
pub struct CannedChat {
    name: String,
    #[allow(dead_code)]
    config: ModelConfig,
    #[allow(dead_code)]
    callbacks: Option<Handle>,
    #[allow(dead_code)]
    cache: Option<Handle>,
    responses: Vec<String>,
    cursor: AtomicUsize,
}

impl CannedChat {
    /// Creates a provider named `name` replaying `responses`.
    ///
    /// `config` is stored for interface parity with network providers and
    /// not consulted. An absent or empty list falls back to the single
    /// [`DEFAULT_RESPONSE`].
    pub fn new(
        name: impl Into<String>,
        config: ModelConfig,
        responses: Option<Vec<String>>,
    ) -> Self {
        let responses = match responses {
            Some(r) if !r.is_empty() => r,
            _ => vec![DEFAULT_RESPONSE.to_string()],
        };
        Self {
            name: name.into(),
            config,
            callbacks: None,
            cache: None,
            responses,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Attaches the pipeline's callback handle. Held, never invoked.
    pub fn with_callbacks(mut self, callbacks: Handle) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Attaches the pipeline's cache handle. Held, never read.
    pub fn with_cache(mut self, cache: Handle) -> Self {
        self.cache = Some(cache);
        self
    }

    fn next_response(&self) -> String {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.responses[idx % self.responses.len()].clone()
    }
}

#[async_trait(?Send)]
impl ChatModel for CannedChat {
    fn chat(
        &self,
        prompt: &str,
        _history: &[Message],
        _options: &CallOptions,
    ) -> anyhow::Result<ModelResponse> {
        trace!(target: "llm", model = %self.name, prompt = %prompt, "canned chat");
        let content = self.next_response();
        debug!(target: "llm", model = %self.name, response = %content, "canned response");
        Ok(ModelResponse::from_content(content))
    }

    async fn achat(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ModelResponse> {
        self.chat(prompt, history, options)
    }

    async fn achat_stream(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ChunkStream> {
        let resp = self.chat(prompt, history, options)?;
        Ok(Box::new(iter([resp.output.content])))
    }

    fn chat_stream(
        &self,
        _prompt: &str,
        _history: &[Message],
        _options: &CallOptions,
    ) -> anyhow::Result<ChunkStream> {
        anyhow::bail!("chat_stream is not supported for {}", self.name)
    }
}
