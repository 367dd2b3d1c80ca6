//! Клиентские маршруты приложения.

use crate::models::PostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Экран, соответствующий пути в адресной строке.
pub enum Route {
    /// `/`: список постов.
    Index,
    /// `/post/:id`: пост с комментариями.
    Post(PostId),
    /// `/404` и любой неизвестный путь.
    NotFound,
}

impl Route {
    /// Разбирает путь. Query-строка и фрагмент игнорируются,
    /// завершающий `/` допускается.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Index,
            ["post", id] => id.parse().map(Self::Post).unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    /// Канонический путь маршрута.
    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_string(),
            Self::Post(id) => format!("/post/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Index);
        assert_eq!(Route::parse(""), Route::Index);
        assert_eq!(Route::parse("/post/7"), Route::Post(7));
        assert_eq!(Route::parse("/post/7/"), Route::Post(7));
        assert_eq!(Route::parse("/post/7?tab=comments"), Route::Post(7));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/404"), Route::NotFound);
        assert_eq!(Route::parse("/post/abc"), Route::NotFound);
        assert_eq!(Route::parse("/post"), Route::NotFound);
        assert_eq!(Route::parse("/users/1"), Route::NotFound);
    }

    #[test]
    fn path_parses_back_to_same_route() {
        for route in [Route::Index, Route::Post(12), Route::NotFound] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
