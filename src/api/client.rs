use std::time::Duration;

use reqwest::{Client, Response};
use thiserror::Error;

use crate::models::{NewWord, Profile, Word, WordPatch};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Failure of a single store operation. Transport problems (connect, timeout,
/// malformed body) and non-success statuses are kept apart here; the app
/// collapses both into one "operation failed" outcome for the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for the remote word/profile service. All state lives there; this
/// client is the only thing in the process that talks to it.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    client: Client,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Base URL from `WORDBOOK_API_URL`, falling back to the default local
    /// service address.
    pub fn from_env() -> Self {
        let base =
            std::env::var("WORDBOOK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let response = self
            .client
            .get(format!("{}/profiles", self.base_url))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_profile(&self, name: &str) -> Result<Profile, StoreError> {
        let response = self
            .client
            .post(format!("{}/profiles", self.base_url))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_profile(&self, profile_id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/profiles/{}", self.base_url, profile_id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn words(&self, profile_id: i64) -> Result<Vec<Word>, StoreError> {
        let response = self
            .client
            .get(format!("{}/words/{}", self.base_url, profile_id))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_word(&self, profile_id: i64, word: &NewWord) -> Result<Word, StoreError> {
        let response = self
            .client
            .post(format!("{}/words/{}", self.base_url, profile_id))
            .json(word)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update_word(&self, word_id: i64, patch: &WordPatch) -> Result<Word, StoreError> {
        let response = self
            .client
            .put(format!("{}/words/{}", self.base_url, word_id))
            .json(patch)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_word(&self, word_id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/words/{}", self.base_url, word_id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn word_json(id: i64, term: &str, level: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "profileId": 1,
            "term": term,
            "definition": "달리다",
            "exampleSentence": "I run every day.",
            "meaningOfExampleSentence": "나는 매일 달린다.",
            "level": level
        })
    }

    #[tokio::test]
    async fn lists_profiles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profiles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "Mina" },
                { "id": 2, "name": "Joon" }
            ])))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        let profiles = client.profiles().await.unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "Mina");
    }

    #[tokio::test]
    async fn creates_a_profile_with_a_name_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/profiles"))
            .and(body_json(serde_json::json!({ "name": "Mina" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "id": 5, "name": "Mina" })),
            )
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        let profile = client.create_profile("Mina").await.unwrap();
        assert_eq!(profile.id, 5);
    }

    #[tokio::test]
    async fn lists_words_for_a_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([word_json(7, "run", 0)])),
            )
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        let words = client.words(1).await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].term, "run");
        assert_eq!(words[0].definition, "달리다");
    }

    #[tokio::test]
    async fn creates_a_word_under_the_profile_path() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "term": "run",
            "definition": "달리다",
            "exampleSentence": "I run every day.",
            "meaningOfExampleSentence": "나는 매일 달린다.",
            "level": 0
        });
        Mock::given(method("POST"))
            .and(path("/words/1"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(word_json(7, "run", 0)))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        let new_word = NewWord {
            term: "run".into(),
            definition: "달리다".into(),
            example_sentence: "I run every day.".into(),
            meaning_of_example_sentence: "나는 매일 달린다.".into(),
            level: 0,
        };
        let word = client.create_word(1, &new_word).await.unwrap();
        assert_eq!(word.id, 7);
        assert_eq!(word.profile_id, 1);
    }

    #[tokio::test]
    async fn updates_a_word_with_a_partial_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/words/7"))
            .and(body_json(serde_json::json!({ "level": 1 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(word_json(7, "run", 1)))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        let patch = WordPatch {
            level: Some(1),
            ..WordPatch::default()
        };
        let word = client.update_word(7, &patch).await.unwrap();
        assert_eq!(word.level, 1);
    }

    #[tokio::test]
    async fn deletes_a_word() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/words/7"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        assert!(client.delete_word(7).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_becomes_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/profiles/3"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        match client.delete_profile(3).await {
            Err(StoreError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profiles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = StoreClient::new(&server.uri());
        match client.profiles().await {
            Err(StoreError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = StoreClient::new("http://localhost:9999/api/");
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }
}
