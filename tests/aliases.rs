use forwardemail::{
    AliasName, AliasParameters, Auth, DomainName, ForwardEmailClient, ForwardEmailError,
    GeneratePasswordParameters,
};
use httpmock::prelude::*;

const BASIC_AUTH: &str = "Basic dGVzdF9rZXk6";

const ALIAS_JSON: &str = r#"
{
  "user": { "id": "u1", "object": "user", "email": "owner@example.com" },
  "domain": { "id": "d1", "object": "domain", "name": "example.com" },
  "name": "sales",
  "description": "Sales team",
  "labels": ["team"],
  "is_enabled": true,
  "has_recipient_verification": false,
  "recipients": ["a@b.com", "c@d.com"],
  "id": "abc123",
  "object": "alias",
  "created_at": "2024-05-01T10:00:00.000Z",
  "updated_at": "2024-05-02T10:00:00.000Z"
}
"#;

fn client(server: &MockServer) -> ForwardEmailClient {
    ForwardEmailClient::builder(Auth::api_key("test_key").unwrap())
        .base_url(server.base_url())
        .build()
        .unwrap()
}

fn example_com() -> DomainName {
    DomainName::new("example.com").unwrap()
}

fn sales() -> AliasName {
    AliasName::new("sales").unwrap()
}

#[tokio::test]
async fn get_aliases_sends_basic_auth_and_decodes_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/domains/example.com/aliases")
                .header("authorization", BASIC_AUTH);
            then.status(200)
                .header("content-type", "application/json")
                .body(format!("[{ALIAS_JSON}]"));
        })
        .await;

    let aliases = client(&server).get_aliases(&example_com()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases[0].id, "abc123");
    assert_eq!(aliases[0].user.id(), "u1");
    assert_eq!(
        aliases[0].domain.embedded().map(|it| it.name.as_str()),
        Some("example.com")
    );
}

#[tokio::test]
async fn get_alias_decodes_bare_references() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/domains/example.com/aliases/sales");
            then.status(200).body(
                r#"{"id":"abc123","name":"sales","user":"u1","domain":"d1","recipients":[]}"#,
            );
        })
        .await;

    let alias = client(&server)
        .get_alias(&example_com(), &sales())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(alias.id, "abc123");
    assert_eq!(alias.name, "sales");
    assert_eq!(alias.user.id(), "u1");
    assert!(alias.user.embedded().is_none());
    assert_eq!(alias.domain.id(), "d1");
}

#[tokio::test]
async fn create_alias_sends_form_encoded_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/domains/example.com/aliases")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(
                    "name=sales&description=Sales+team&is_enabled=true\
                     &recipients%5B%5D=a%40b.com&recipients%5B%5D=c%40d.com",
                );
            then.status(200).body(ALIAS_JSON);
        })
        .await;

    let parameters = AliasParameters {
        recipients: Some(vec!["a@b.com".to_owned(), "c@d.com".to_owned()]),
        description: "Sales team".to_owned(),
        is_enabled: Some(true),
        ..Default::default()
    };
    let alias = client(&server)
        .create_alias(&example_com(), &sales(), &parameters)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(alias.recipients, vec!["a@b.com", "c@d.com"]);
}

#[tokio::test]
async fn update_alias_puts_to_alias_resource() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/domains/example.com/aliases/sales")
                .body("name=sales&has_recipient_verification=false&labels%5B%5D=vip");
            then.status(200).body(ALIAS_JSON);
        })
        .await;

    let parameters = AliasParameters {
        labels: Some(vec!["vip".to_owned()]),
        has_recipient_verification: Some(false),
        ..Default::default()
    };
    client(&server)
        .update_alias(&example_com(), &sales(), &parameters)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_alias_accepts_no_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/v1/domains/example.com/aliases/sales")
                .header("authorization", BASIC_AUTH);
            then.status(204);
        })
        .await;

    client(&server)
        .delete_alias(&example_com(), &sales())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn generate_alias_password_posts_to_sub_resource() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/domains/example.com/aliases/sales/generate-password")
                .body("new_password=hunter22&is_override=true");
            then.status(200)
                .body(r#"{"username":"sales@example.com","password":"hunter22"}"#);
        })
        .await;

    let parameters = GeneratePasswordParameters {
        new_password: Some("hunter22".to_owned()),
        is_override: Some(true),
        ..Default::default()
    };
    let generated = client(&server)
        .generate_alias_password(&example_com(), &sales(), &parameters)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(generated.username, "sales@example.com");
    assert_eq!(generated.password, "hunter22");
}

#[tokio::test]
async fn api_error_document_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/domains/example.com/aliases/sales");
            then.status(404).body(
                r#"{"statusCode":404,"error":"Not Found","message":"Alias does not exist."}"#,
            );
        })
        .await;

    let err = client(&server)
        .get_alias(&example_com(), &sales())
        .await
        .unwrap_err();

    match err {
        ForwardEmailError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Alias does not exist.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
