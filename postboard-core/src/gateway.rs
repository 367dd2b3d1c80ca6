//! Контракт доступа к REST API блога.

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::models::{CommentId, Post, PostId, RawComment, User, UserId};

/// Удалённый источник постов, пользователей и комментариев.
///
/// Методы возвращают `?Send`-футуры: браузерная реализация построена
/// на `gloo-net`, чьи футуры не `Send`.
#[async_trait(?Send)]
pub trait PostsGateway {
    /// `GET /posts`
    async fn list_posts(&self) -> GatewayResult<Vec<Post>>;

    /// `GET /posts/{id}`
    async fn get_post(&self, id: PostId) -> GatewayResult<Post>;

    /// `GET /users`
    async fn list_users(&self) -> GatewayResult<Vec<User>>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: UserId) -> GatewayResult<User>;

    /// `GET /posts/{id}/comments`
    async fn list_comments(&self, post_id: PostId) -> GatewayResult<Vec<RawComment>>;

    /// `DELETE /comments/{id}`
    ///
    /// Тестовый API отвечает успехом, но удаление не сохраняет.
    async fn delete_comment(&self, id: CommentId) -> GatewayResult<()>;
}
