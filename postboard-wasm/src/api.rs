use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use postboard_core::models::{CommentId, PostId, UserId};
use postboard_core::{GatewayError, GatewayResult, Post, PostsGateway, RawComment, User};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub(crate) struct ApiGateway {
    base_url: String,
}

impl ApiGateway {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, request: RequestBuilder) -> GatewayResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(parse_error_body(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        self.send(Request::get(&self.endpoint(path)))
            .await?
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

async fn parse_error_body(response: Response) -> GatewayError {
    let status = response.status();
    let text = response.text().await.ok();
    GatewayError::from_status(status, text)
}

#[async_trait(?Send)]
impl PostsGateway for ApiGateway {
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
        self.send(Request::delete(&self.endpoint(&format!("/comments/{id}"))))
            .await
            .map(|_| ())
    }
}
