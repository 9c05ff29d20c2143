use std::sync::Arc;

use menubot::tests::util::{init_test_db, UnavailableModel};
use menubot::{ConceptService, LlmConfig, Normalizer, ParamField};
use teloxide::prelude::*;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

const SENT: &str = r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"}}}"#;

fn test_me() -> teloxide::types::Me {
    teloxide::types::Me {
        user: teloxide::types::User {
            id: teloxide::types::UserId(1),
            is_bot: true,
            first_name: "Test".into(),
            last_name: None,
            username: Some("testbot".into()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        },
        can_join_groups: true,
        can_read_all_group_messages: true,
        supports_inline_queries: false,
        can_connect_to_business: false,
    }
}

fn offline_service() -> Arc<ConceptService> {
    Arc::new(ConceptService::new(
        Arc::new(UnavailableModel),
        Normalizer::default(),
    ))
}

#[tokio::test]
async fn generate_command_sends_fallback_when_model_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/DeleteMessage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"ok":true,"result":true}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;

    let update: Update = serde_json::from_str(
        r#"{"update_id":1,"message":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"text":"/generate","entities":[{"type":"bot_command","offset":0,"length":9}]}}"#,
    )
    .unwrap();

    let _ = menubot::schema()
        .dispatch(dptree::deps![
            update,
            bot,
            test_me(),
            db,
            offline_service(),
            LlmConfig::default(),
            5u64
        ])
        .await;

    server.verify().await;
    let requests = server.received_requests().await.unwrap();
    let concept = requests
        .iter()
        .filter(|r| r.url.path() == "/botTEST/SendMessage")
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .find(|body| body.contains("Bella Vista (Casual)"));
    assert!(concept.is_some(), "fallback concept was not sent");
}

#[tokio::test]
async fn generate_command_uses_requested_cuisine() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("Casa Fiesta (Casual)"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/DeleteMessage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"ok":true,"result":true}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;

    let update: Update = serde_json::from_str(
        r#"{"update_id":2,"message":{"message_id":2,"date":0,"chat":{"id":1,"type":"private"},"text":"/generate Mexican","entities":[{"type":"bot_command","offset":0,"length":9}]}}"#,
    )
    .unwrap();

    let _ = menubot::schema()
        .dispatch(dptree::deps![
            update,
            bot,
            test_me(),
            db.clone(),
            offline_service(),
            LlmConfig::default(),
            5u64
        ])
        .await;

    server.verify().await;
    // The override applies to one request only.
    assert_eq!(db.load_params(ChatId(1)).await.unwrap().cuisine(), "Italian");
}

#[tokio::test]
async fn plain_text_gets_a_hint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("/customize"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let update: Update = serde_json::from_str(
        r#"{"update_id":3,"message":{"message_id":3,"date":0,"chat":{"id":1,"type":"private"},"text":"pizza please"}}"#,
    )
    .unwrap();

    let _ = menubot::schema()
        .dispatch(dptree::deps![
            update,
            bot,
            test_me(),
            init_test_db().await,
            offline_service(),
            LlmConfig::default(),
            5u64
        ])
        .await;

    server.verify().await;
}

#[tokio::test]
async fn panel_choice_is_stored_and_panel_redrawn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/AnswerCallbackQuery"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"ok":true,"result":true}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/botTEST/EditMessageText"))
        .and(body_string_contains("Cuisine: Chinese"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":true,"result":{"message_id":5,"date":1700000000,"chat":{"id":1,"type":"private"},"text":"panel"}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;

    let update: Update = serde_json::from_str(
        r#"{"update_id":4,"callback_query":{"id":"q1","from":{"id":1,"is_bot":false,"first_name":"Ann"},"chat_instance":"ci","data":"set:cuisine:1","message":{"message_id":5,"date":1700000000,"chat":{"id":1,"type":"private"},"text":"panel"}}}"#,
    )
    .unwrap();

    let _ = menubot::schema()
        .dispatch(dptree::deps![
            update,
            bot,
            test_me(),
            db.clone(),
            offline_service(),
            LlmConfig::default(),
            5u64
        ])
        .await;

    server.verify().await;
    let params = db.load_params(ChatId(1)).await.unwrap();
    assert_eq!(params.get(ParamField::Cuisine), "Chinese");
}
