pub mod canned;
pub mod config;
pub mod factory;
pub mod response;

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_stream::Stream;

pub use config::{load_model_configs, ModelConfig};
pub use factory::ModelFactory;
pub use response::{Message, ModelOutput, ModelResponse};

/// Free-form per-call parameters forwarded to the backend.
///
/// Providers read the keys they understand and ignore the rest.
pub type CallOptions = serde_json::Map<String, serde_json::Value>;

/// Chunks of a streamed chat completion.
pub type ChunkStream = Box<dyn Stream<Item = String> + Unpin>;

/// Opaque caller-owned handle carried through provider construction.
///
/// Network-backed providers downcast these to the pipeline's callback and
/// cache types; local providers hold them without looking inside.
pub type Handle = Arc<dyn Any + Send + Sync>;

/// Interface shared by every chat-capable model provider.
///
/// The pipeline resolves providers through the [`ModelFactory`] and talks to
/// them as `Box<dyn ChatModel>`, so a local stand-in and a network-backed
/// model are interchangeable at every call site.
#[async_trait(?Send)]
pub trait ChatModel {
    /// Generates a response for `prompt`.
    fn chat(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ModelResponse>;

    /// Asynchronously generates a response for `prompt`.
    async fn achat(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ModelResponse>;

    /// Streams the response for `prompt` chunk by chunk.
    ///
    /// ```
    /// use graphling::llm::canned::CannedChat;
    /// use graphling::llm::{ChatModel, ModelConfig};
    /// use tokio_stream::StreamExt;
    /// # tokio_test::block_on(async {
    /// let model = CannedChat::new("stub", ModelConfig::default(), None);
    /// let chunks: Vec<String> = model
    ///     .achat_stream("hi", &[], &Default::default())
    ///     .await
    ///     .unwrap()
    ///     .collect()
    ///     .await;
    /// assert_eq!(chunks, vec!["Codex response".to_string()]);
    /// # });
    /// ```
    async fn achat_stream(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ChunkStream>;

    /// Streams the response without an async runtime.
    ///
    /// Providers that cannot deliver chunks outside a runtime return an
    /// error here; callers must treat it as a permanent capability
    /// limitation, not a transient fault.
    fn chat_stream(
        &self,
        prompt: &str,
        history: &[Message],
        options: &CallOptions,
    ) -> anyhow::Result<ChunkStream>;
}
