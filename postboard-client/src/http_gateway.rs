use std::time::Duration;

use async_trait::async_trait;
use postboard_core::{
    GatewayError, GatewayResult, Post, PostsGateway, RawComment, User,
    models::{CommentId, PostId, UserId},
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{decode_error, from_reqwest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Таймауты HTTP-клиента.
pub struct HttpGatewayOptions {
    /// Таймаут установки соединения.
    pub connect_timeout: Duration,
    /// Таймаут всего запроса.
    pub timeout: Duration,
}

impl Default for HttpGatewayOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент REST API блога.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Создаёт клиент с базовым URL API, например `https://jsonplaceholder.typicode.com`.
    pub fn new(base_url: impl Into<String>, options: HttpGatewayOptions) -> GatewayResult<Self> {
        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()
            .map_err(|err| GatewayError::Transport(format!("failed to build http client: {err}")))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Базовый URL API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, method: Method, path: &str) -> GatewayResult<reqwest::Response> {
        let url = self.endpoint(path);
        debug!(method = method.as_str(), url = url.as_str(), "sending request");

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        self.send(Method::GET, path)
            .await?
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl PostsGateway for HttpGateway {
    async fn list_posts(&self) -> GatewayResult<Vec<Post>> {
        self.get_json("/posts").await
    }

    async fn get_post(&self, id: PostId) -> GatewayResult<Post> {
        self.get_json(&format!("/posts/{id}")).await
    }

    async fn list_users(&self) -> GatewayResult<Vec<User>> {
        self.get_json("/users").await
    }

    async fn get_user(&self, id: UserId) -> GatewayResult<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    async fn list_comments(&self, post_id: PostId) -> GatewayResult<Vec<RawComment>> {
        self.get_json(&format!("/posts/{post_id}/comments")).await
    }

    async fn delete_comment(&self, id: CommentId) -> GatewayResult<()> {
        self.send(Method::DELETE, &format!("/comments/{id}"))
            .await
            .map(|_| ())
    }
}
