use graphling::llm::canned::{CannedChat, DEFAULT_RESPONSE};
use graphling::llm::{
    load_model_configs, CallOptions, ChatModel, Message, ModelConfig, ModelFactory,
};
use tokio_stream::StreamExt;
use tracing_test::traced_test;

fn opts() -> CallOptions {
    CallOptions::new()
}

fn canned(responses: &[&str]) -> CannedChat {
    CannedChat::new(
        "stub",
        ModelConfig::default(),
        Some(responses.iter().map(|s| s.to_string()).collect()),
    )
}

#[test]
fn cycles_through_responses_in_order() {
    let model = canned(&["one", "two"]);
    let seen: Vec<String> = (0..4)
        .map(|_| {
            model
                .chat("hi", &[], &opts())
                .expect("chat")
                .content()
                .to_string()
        })
        .collect();
    assert_eq!(seen, ["one", "two", "one", "two"]);
}

#[test]
fn default_construction_always_returns_codex_response() {
    let model = CannedChat::new("stub", ModelConfig::default(), None);
    for _ in 0..3 {
        let resp = model.chat("hi", &[], &opts()).expect("chat");
        assert_eq!(resp.content(), DEFAULT_RESPONSE);
    }
}

#[test]
fn empty_response_list_falls_back_to_default() {
    let model = CannedChat::new("stub", ModelConfig::default(), Some(vec![]));
    let resp = model.chat("hi", &[], &opts()).expect("chat");
    assert_eq!(resp.content(), DEFAULT_RESPONSE);
}

#[test]
fn history_and_options_are_ignored() {
    let model = canned(&["fixed"]);
    let history = vec![Message::system("be terse"), Message::user("hello")];
    let mut options = opts();
    options.insert("temperature".into(), serde_json::json!(0.7));
    let resp = model.chat("hi", &history, &options).expect("chat");
    assert_eq!(resp.content(), "fixed");
    assert!(resp.history.is_empty());
}

#[tokio::test]
async fn achat_and_chat_share_one_cursor() {
    let model = canned(&["a", "b", "c"]);
    assert_eq!(model.chat("hi", &[], &opts()).expect("chat").content(), "a");
    let resp = model.achat("hi", &[], &opts()).await.expect("achat");
    assert_eq!(resp.content(), "b");
    assert_eq!(model.chat("hi", &[], &opts()).expect("chat").content(), "c");
    let resp = model.achat("hi", &[], &opts()).await.expect("achat");
    assert_eq!(resp.content(), "a");
}

#[tokio::test]
async fn achat_stream_yields_single_chunk() {
    let model = canned(&["first", "second"]);
    let stream = model
        .achat_stream("hi", &[], &opts())
        .await
        .expect("stream");
    let chunks: Vec<String> = stream.collect().await;
    assert_eq!(chunks, vec!["first".to_string()]);

    // A fresh invocation advances the cursor again.
    let stream = model
        .achat_stream("hi", &[], &opts())
        .await
        .expect("stream");
    let chunks: Vec<String> = stream.collect().await;
    assert_eq!(chunks, vec!["second".to_string()]);
}

#[test]
fn chat_stream_is_unsupported() {
    let model = canned(&["anything"]);
    let err = model
        .chat_stream("hi", &[], &opts())
        .err()
        .expect("chat_stream must fail");
    assert!(err.to_string().contains("not supported"));

    // Failing does not consume a response.
    assert_eq!(
        model.chat("hi", &[], &opts()).expect("chat").content(),
        "anything"
    );
}

#[traced_test]
#[test]
fn chat_logs_the_selected_response() {
    let model = canned(&["logged"]);
    model.chat("hi", &[], &opts()).expect("chat");
    assert!(logs_contain("canned response"));
}

#[test]
fn factory_builds_canned_provider_from_config() {
    let factory = ModelFactory::new();
    let config = ModelConfig {
        provider: "canned".into(),
        responses: vec!["ok".into()],
        ..Default::default()
    };
    let model = factory.create("default_chat", &config).expect("create");
    let resp = model.chat("hi", &[], &opts()).expect("chat");
    assert_eq!(resp.content(), "ok");
}

#[test]
fn factory_rejects_unknown_provider() {
    let factory = ModelFactory::new();
    let config = ModelConfig {
        provider: "warp_drive".into(),
        ..Default::default()
    };
    let err = factory
        .create("default_chat", &config)
        .err()
        .expect("unknown provider must fail");
    assert!(err.to_string().contains("unknown chat provider"));
}

#[test]
fn loads_model_configs_from_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("models.toml");
    std::fs::write(
        &path,
        r#"
[[model]]
provider = "canned"
name = "default_chat"
responses = ["alpha", "beta"]

[[model]]
provider = "openai_chat"
model = "gpt-4o"
api_key = "sk-test"
concurrency = 4
"#,
    )
    .expect("write config");

    let configs = load_model_configs(&path).expect("load");
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].provider, "canned");
    assert_eq!(configs[0].name.as_deref(), Some("default_chat"));
    assert_eq!(configs[0].responses, ["alpha", "beta"]);
    assert_eq!(configs[1].model, "gpt-4o");
    assert_eq!(configs[1].concurrency, Some(4));
    assert!(configs[1].responses.is_empty());
}
