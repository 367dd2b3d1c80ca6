//! Загрузка данных экранов через [`PostsGateway`].

use futures::try_join;
use tracing::{debug, warn};

use crate::error::GatewayResult;
use crate::gateway::PostsGateway;
use crate::models::{AuthoredPost, PostDetail, PostId};
use crate::view::{SYNTHETIC_USER_BASE, decorate_comments, join_posts_with_authors};

/// Загружает все посты и всех пользователей параллельно и склеивает их.
pub async fn fetch_index<G>(gateway: &G) -> GatewayResult<Vec<AuthoredPost>>
where
    G: PostsGateway + ?Sized,
{
    let (posts, users) = try_join!(gateway.list_posts(), gateway.list_users())?;
    debug!(posts = posts.len(), users = users.len(), "index fetched");
    Ok(join_posts_with_authors(posts, &users))
}

/// Загружает пост с комментариями, затем автора поста.
///
/// Автор нужен только для подписи: любая ошибка его загрузки даёт
/// `author: None`. Экран падает лишь на ошибках поста и комментариев.
pub async fn fetch_detail<G>(gateway: &G, post_id: PostId) -> GatewayResult<PostDetail>
where
    G: PostsGateway + ?Sized,
{
    let (post, comments) = try_join!(gateway.get_post(post_id), gateway.list_comments(post_id))?;

    let author = match gateway.get_user(post.user_id).await {
        Ok(user) => Some(user),
        Err(err) => {
            warn!(post_id, user_id = post.user_id, error = %err, "failed to fetch post author");
            None
        }
    };

    debug!(post_id, comments = comments.len(), "post fetched");
    Ok(PostDetail {
        post,
        author,
        comments: decorate_comments(comments, SYNTHETIC_USER_BASE),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::error::GatewayError;
    use crate::models::{CommentId, Post, RawComment, User, UserId};

    #[derive(Default)]
    struct FakeGateway {
        posts: Vec<Post>,
        users: Vec<User>,
        comments: Vec<RawComment>,
        fail_users: bool,
        fail_user_lookup: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    #[async_trait(?Send)]
    impl PostsGateway for FakeGateway {
        async fn list_posts(&self) -> GatewayResult<Vec<Post>> {
            self.record("GET /posts");
            Ok(self.posts.clone())
        }

        async fn get_post(&self, id: PostId) -> GatewayResult<Post> {
            self.record(format!("GET /posts/{id}"));
            self.posts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(GatewayError::NotFound)
        }

        async fn list_users(&self) -> GatewayResult<Vec<User>> {
            self.record("GET /users");
            if self.fail_users {
                return Err(GatewayError::Transport("connection reset".into()));
            }
            Ok(self.users.clone())
        }

        async fn get_user(&self, id: UserId) -> GatewayResult<User> {
            self.record(format!("GET /users/{id}"));
            if self.fail_user_lookup {
                return Err(GatewayError::Transport("reset".into()));
            }
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(GatewayError::NotFound)
        }

        async fn list_comments(&self, post_id: PostId) -> GatewayResult<Vec<RawComment>> {
            self.record(format!("GET /posts/{post_id}/comments"));
            Ok(self
                .comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect())
        }

        async fn delete_comment(&self, id: CommentId) -> GatewayResult<()> {
            self.record(format!("DELETE /comments/{id}"));
            Ok(())
        }
    }

    fn sample_gateway() -> FakeGateway {
        FakeGateway {
            posts: vec![
                Post {
                    id: 1,
                    user_id: 1,
                    title: "first".into(),
                    body: "a".into(),
                },
                Post {
                    id: 2,
                    user_id: 7,
                    title: "orphan".into(),
                    body: "b".into(),
                },
            ],
            users: vec![User {
                id: 1,
                name: "Leanne Graham".into(),
                username: "Bret".into(),
                email: String::new(),
            }],
            comments: (1..=3)
                .map(|id| RawComment {
                    id,
                    post_id: 1,
                    name: format!("c{id}"),
                    email: String::new(),
                    body: String::new(),
                })
                .collect(),
            ..FakeGateway::default()
        }
    }

    #[test]
    fn index_joins_posts_with_authors() {
        let gateway = sample_gateway();

        let posts = block_on(fetch_index(&gateway)).expect("index should load");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author_name(), "Leanne Graham");
        assert!(posts[1].user.is_none());
        let calls = gateway.calls.borrow();
        assert!(calls.contains(&"GET /posts".to_string()));
        assert!(calls.contains(&"GET /users".to_string()));
    }

    #[test]
    fn index_fails_when_either_request_fails() {
        let gateway = FakeGateway {
            fail_users: true,
            ..sample_gateway()
        };

        let err = block_on(fetch_index(&gateway)).expect_err("users failure must propagate");
        assert_eq!(err, GatewayError::Transport("connection reset".into()));
    }

    #[test]
    fn detail_decorates_comments_from_zero() {
        let gateway = sample_gateway();

        let detail = block_on(fetch_detail(&gateway, 1)).expect("detail should load");

        assert_eq!(detail.author.map(|u| u.name), Some("Leanne Graham".to_string()));
        let owners: Vec<i64> = detail.comments.iter().map(|c| c.user_id).collect();
        assert_eq!(owners, vec![0, 1, 2]);
    }

    #[test]
    fn detail_without_author_is_not_an_error() {
        let gateway = sample_gateway();

        let detail = block_on(fetch_detail(&gateway, 2)).expect("detail should load");

        assert!(detail.author.is_none());
        assert!(detail.comments.is_empty());
    }

    #[test]
    fn detail_survives_author_transport_error() {
        let gateway = FakeGateway {
            fail_user_lookup: true,
            ..sample_gateway()
        };

        let detail = block_on(fetch_detail(&gateway, 1)).expect("post must still load");

        assert_eq!(detail.post.title, "first");
        assert!(detail.author.is_none());
        assert_eq!(detail.comments.len(), 3);
        assert!(gateway.calls.borrow().contains(&"GET /users/1".to_string()));
    }

    #[test]
    fn detail_for_missing_post_is_not_found() {
        let gateway = sample_gateway();

        let err = block_on(fetch_detail(&gateway, 9999)).expect_err("missing post");
        assert!(err.is_not_found());
        assert!(!gateway.calls.borrow().iter().any(|c| c.starts_with("GET /users")));
    }
}
