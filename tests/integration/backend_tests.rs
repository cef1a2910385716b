//! Provider client integration tests against mocked upstreams

use fantasy_chat_gateway::backend::{
    CompletionBackend, FantasyBackend, NewsApiClient, NewsBackend, OpenAICompletionClient,
    SleeperClient,
};
use fantasy_chat_gateway::config::{CompletionConfig, FantasyConfig, NewsConfig};
use fantasy_chat_gateway::AppError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_config(server: &MockServer) -> CompletionConfig {
    CompletionConfig {
        base_url: format!("{}/v1/", server.uri()),
        ..Default::default()
    }
}

fn news_config(server: &MockServer) -> NewsConfig {
    NewsConfig {
        base_url: format!("{}/v2", server.uri()),
        ..Default::default()
    }
}

fn fantasy_config(server: &MockServer) -> FantasyConfig {
    FantasyConfig {
        base_url: format!("{}/v1", server.uri()),
    }
}

#[tokio::test]
async fn test_completion_sends_single_user_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{ "role": "user", "content": "Who is the best QB?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Hard to say." }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "Second choice" }, "finish_reason": "stop" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        OpenAICompletionClient::new(&completion_config(&server), Some("sk-test".to_string()))
            .unwrap();
    let reply = client.complete("Who is the best QB?").await.unwrap();

    assert_eq!(reply.as_deref(), Some("Hard to say."));
}

#[tokio::test]
async fn test_completion_null_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let client =
        OpenAICompletionClient::new(&completion_config(&server), Some("sk-test".to_string()))
            .unwrap();

    assert_eq!(client.complete("hi").await.unwrap(), None);
}

#[tokio::test]
async fn test_completion_without_choices_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client =
        OpenAICompletionClient::new(&completion_config(&server), Some("sk-test".to_string()))
            .unwrap();
    let err = client.complete("hi").await.unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
}

#[tokio::test]
async fn test_completion_error_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "Incorrect API key provided" } })),
        )
        .mount(&server)
        .await;

    let client =
        OpenAICompletionClient::new(&completion_config(&server), Some("sk-bad".to_string()))
            .unwrap();
    let err = client.complete("hi").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("Incorrect API key provided"));
}

#[tokio::test]
async fn test_completion_missing_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAICompletionClient::new(&completion_config(&server), None).unwrap();
    let err = client.complete("hi").await.unwrap_err();

    assert!(matches!(err, AppError::MissingCredential(ref var) if var == "OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_news_search_query_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "Patrick Mahomes"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "publishedAt"))
        .and(header("x-api-key", "news-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": { "id": null, "name": "ESPN" },
                "author": "Staff",
                "title": "Mahomes throws four touchdowns",
                "url": "https://espn.example/mahomes",
                "publishedAt": "2024-03-05T10:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = NewsApiClient::new(&news_config(&server), Some("news-test".to_string())).unwrap();
    let articles = client.search("Patrick Mahomes").await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title.as_deref(), Some("Mahomes throws four touchdowns"));
    assert_eq!(articles[0].published_at.as_deref(), Some("2024-03-05T10:00:00Z"));
}

#[tokio::test]
async fn test_news_provider_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let client = NewsApiClient::new(&news_config(&server), Some("bad".to_string())).unwrap();
    let err = client.search("anyone").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "apiKeyInvalid: Your API key is invalid or incorrect."
    );
}

#[tokio::test]
async fn test_news_missing_key() {
    let server = MockServer::start().await;
    let client = NewsApiClient::new(&news_config(&server), None).unwrap();

    let err = client.search("anyone").await.unwrap_err();
    assert_eq!(err.to_string(), "NEWS_API_KEY is not set");
}

#[tokio::test]
async fn test_sleeper_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/sleeperfan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "sleeperfan" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/league/784512"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "league_id": "784512" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/league/784512/rosters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "roster_id": 1 }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SleeperClient::new(&fantasy_config(&server)).unwrap();

    assert_eq!(client.user("sleeperfan").await.unwrap()["username"], "sleeperfan");
    assert_eq!(client.league("784512").await.unwrap()["league_id"], "784512");
    assert_eq!(client.rosters("784512").await.unwrap(), json!([{ "roster_id": 1 }]));
}

#[tokio::test]
async fn test_sleeper_error_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/league/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = SleeperClient::new(&fantasy_config(&server)).unwrap();
    let err = client.league("missing").await.unwrap_err();

    assert!(matches!(err, AppError::HttpClient(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_sleeper_null_body_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = SleeperClient::new(&fantasy_config(&server)).unwrap();

    assert!(client.user("nobody").await.unwrap().is_null());
}

#[tokio::test]
async fn test_sleeper_argument_cannot_reach_another_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/league/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "league_id": "42" })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/user/..%2Fleague%2F42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "odd" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SleeperClient::new(&fantasy_config(&server)).unwrap();

    assert_eq!(client.user("../league/42").await.unwrap()["username"], "odd");
}

#[tokio::test]
async fn test_news_null_articles_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 0,
            "articles": null
        })))
        .mount(&server)
        .await;

    let client = NewsApiClient::new(&news_config(&server), Some("news-test".to_string())).unwrap();

    assert!(client.search("anyone").await.unwrap().is_empty());
}
