//! View-model'и: склейка постов с авторами, синтетические владельцы
//! комментариев и клиентская пагинация.
//!
//! Все функции чистые: одинаковые входы дают одинаковый результат,
//! ошибок нет (отсутствие автора ошибкой не считается).

use crate::models::{AuthoredPost, Comment, CommentId, Post, RawComment, User, UserId};

/// С какого значения начинается нумерация синтетических `user_id` комментариев.
pub const SYNTHETIC_USER_BASE: UserId = 0;

/// Присоединяет к каждому посту автора с `id == post.user_id`.
///
/// Поиск линейный: коллекции маленькие, а вызов происходит один раз
/// на обновление. Если автор не найден, `user` остаётся `None`.
pub fn join_posts_with_authors(posts: Vec<Post>, users: &[User]) -> Vec<AuthoredPost> {
    posts
        .into_iter()
        .map(|post| {
            let user = users.iter().find(|user| user.id == post.user_id).cloned();
            AuthoredPost { post, user }
        })
        .collect()
}

/// Назначает комментариям синтетические `user_id = base + index`.
///
/// Длина и порядок сохраняются, идентификаторы уникальны в пределах списка.
pub fn decorate_comments(comments: Vec<RawComment>, base: UserId) -> Vec<Comment> {
    comments
        .into_iter()
        .zip(base..)
        .map(|(raw, user_id)| Comment {
            id: raw.id,
            post_id: raw.post_id,
            name: raw.name,
            email: raw.email,
            body: raw.body,
            user_id,
        })
        .collect()
}

/// Может ли зритель удалить комментарий. Правило только для отображения.
pub fn can_delete(comment: &Comment, viewer: UserId) -> bool {
    comment.user_id == viewer
}

/// Удаляет комментарий с заданным id, порядок остальных не меняется.
///
/// Возвращает `true`, если что-то было удалено.
pub fn remove_comment(comments: &mut Vec<Comment>, id: CommentId) -> bool {
    let before = comments.len();
    comments.retain(|comment| comment.id != id);
    comments.len() != before
}

/// Срез `items` для страницы `page` (нумерация с 1).
///
/// Страница за пределами данных, нулевая страница и нулевой размер
/// страницы дают пустой срез.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Количество страниц: `ceil(total / page_size)`, `0` для пустого списка.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Сквозной порядковый номер строки (с 1) для элемента `index` на странице `page`.
pub fn row_number(page: usize, page_size: usize, index: usize) -> usize {
    page.saturating_sub(1)
        .saturating_mul(page_size)
        .saturating_add(index)
        .saturating_add(1)
}
