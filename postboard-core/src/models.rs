//! Модели данных REST API блога.

use serde::{Deserialize, Serialize};

/// Идентификатор поста.
pub type PostId = i64;
/// Идентификатор пользователя.
pub type UserId = i64;
/// Идентификатор комментария.
pub type CommentId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост в том виде, в котором его отдаёт API.
pub struct Post {
    /// Идентификатор поста.
    pub id: PostId,
    /// Идентификатор автора (внешний ключ на `User::id`).
    pub user_id: UserId,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Автор поста.
pub struct User {
    /// Идентификатор пользователя.
    pub id: UserId,
    /// Отображаемое имя.
    pub name: String,
    /// Логин.
    #[serde(default)]
    pub username: String,
    /// Email.
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий без синтетического автора, как его отдаёт `GET /posts/{id}/comments`.
pub struct RawComment {
    /// Идентификатор комментария.
    pub id: CommentId,
    /// Пост, к которому относится комментарий.
    #[serde(default)]
    pub post_id: PostId,
    /// Заголовок комментария.
    pub name: String,
    /// Email комментатора.
    #[serde(default)]
    pub email: String,
    /// Текст комментария.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий с синтетическим `user_id`.
///
/// `user_id` назначается на клиенте порядковым номером и не связан
/// с реальным автором: он нужен только для демонстрации проверки владения.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: CommentId,
    /// Пост, к которому относится комментарий.
    pub post_id: PostId,
    /// Заголовок комментария.
    pub name: String,
    /// Email комментатора.
    pub email: String,
    /// Текст комментария.
    pub body: String,
    /// Синтетический идентификатор "владельца".
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Пост вместе с денормализованной копией автора.
pub struct AuthoredPost {
    /// Исходный пост.
    pub post: Post,
    /// Автор, если он нашёлся среди пользователей.
    pub user: Option<User>,
}

impl AuthoredPost {
    /// Имя автора или пустая строка, если автор неизвестен.
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Всё, что нужно экрану просмотра поста.
pub struct PostDetail {
    /// Пост.
    pub post: Post,
    /// Автор поста, если он существует.
    pub author: Option<User>,
    /// Комментарии с синтетическими `user_id`.
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_from_camel_case() {
        let raw = r#"{"userId":3,"id":21,"title":"t","body":"b"}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.id, 21);
        assert_eq!(post.user_id, 3);
    }

    #[test]
    fn user_ignores_unknown_fields() {
        let raw = r#"{"id":1,"name":"Leanne Graham","username":"Bret","address":{"city":"Gwenborough"}}"#;
        let user: User = serde_json::from_str(raw).expect("user should parse");
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert!(user.email.is_empty());
    }

    #[test]
    fn raw_comment_has_no_user_id() {
        let raw = r#"{"postId":1,"id":2,"name":"n","email":"e@x.io","body":"b"}"#;
        let comment: RawComment = serde_json::from_str(raw).expect("comment should parse");
        assert_eq!(comment.post_id, 1);
        assert_eq!(comment.id, 2);
    }

    #[test]
    fn author_name_is_empty_without_user() {
        let post = AuthoredPost {
            post: Post {
                id: 1,
                user_id: 99,
                title: "t".to_string(),
                body: "b".to_string(),
            },
            user: None,
        };
        assert_eq!(post.author_name(), "");
    }
}
