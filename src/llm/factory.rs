use std::collections::HashMap;

use super::canned::CannedChat;
use super::config::ModelConfig;
use super::ChatModel;

/// Builds a boxed provider from a binding name and its configuration.
pub type ModelBuilder = Box<dyn Fn(&str, &ModelConfig) -> anyhow::Result<Box<dyn ChatModel>>>;

/// Registry of chat provider constructors keyed by provider type.
///
/// The pipeline resolves every model binding through the factory, which is
/// what lets a canned provider stand in for a network-backed one without
/// touching call sites.
///
/// ```
/// use graphling::llm::{ChatModel, ModelConfig, ModelFactory};
/// let factory = ModelFactory::new();
/// let config = ModelConfig {
///     provider: "canned".into(),
///     responses: vec!["ready".into()],
///     ..Default::default()
/// };
/// let model = factory.create("extract_graph", &config).unwrap();
/// let resp = model.chat("go", &[], &Default::default()).unwrap();
/// assert_eq!(resp.content(), "ready");
/// ```
pub struct ModelFactory {
    builders: HashMap<String, ModelBuilder>,
}

impl ModelFactory {
    /// Creates a factory with the built-in providers registered.
    pub fn new() -> Self {
        let mut factory = Self {
            builders: HashMap::new(),
        };
        factory.register("canned", |name, config| {
            let responses = (!config.responses.is_empty()).then(|| config.responses.clone());
            Ok(Box::new(CannedChat::new(name, config.clone(), responses)) as Box<dyn ChatModel>)
        });
        factory
    }

    /// Registers `builder` under `provider`, replacing any previous entry.
    pub fn register<F>(&mut self, provider: impl Into<String>, builder: F)
    where
        F: Fn(&str, &ModelConfig) -> anyhow::Result<Box<dyn ChatModel>> + 'static,
    {
        self.builders.insert(provider.into(), Box::new(builder));
    }

    /// Instantiates the provider type named by `config.provider`.
    pub fn create(&self, name: &str, config: &ModelConfig) -> anyhow::Result<Box<dyn ChatModel>> {
        match self.builders.get(&config.provider) {
            Some(builder) => builder(name, config),
            None => anyhow::bail!("unknown chat provider '{}'", config.provider),
        }
    }
}

impl Default for ModelFactory {
    fn default() -> Self {
        Self::new()
    }
}
