//! Конфигурация клиента.

use crate::models::UserId;

/// Адрес публичного API по умолчанию.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Размер страницы списка постов.
pub const POSTS_PER_PAGE: usize = 10;

const DEFAULT_LOGGED_IN_USER_ID: UserId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Настройки "вошедшего" пользователя, передаются в слой представления явно.
pub struct ViewerConfig {
    /// Идентификатор пользователя, от имени которого показываются кнопки удаления.
    pub logged_in_user_id: UserId,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            logged_in_user_id: DEFAULT_LOGGED_IN_USER_ID,
        }
    }
}

impl ViewerConfig {
    /// Строит конфигурацию из сырого значения переменной окружения.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            logged_in_user_id: parse_logged_in_user_id(raw),
        }
    }
}

/// Разбирает идентификатор пользователя.
///
/// Отсутствующее, пустое, нечисловое или нулевое значение даёт `1`.
pub fn parse_logged_in_user_id(raw: Option<&str>) -> UserId {
    raw.map(str::trim)
        .and_then(|value| value.parse::<UserId>().ok())
        .filter(|id| *id != 0)
        .unwrap_or(DEFAULT_LOGGED_IN_USER_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_defaults_to_one() {
        assert_eq!(parse_logged_in_user_id(None), 1);
    }

    #[test]
    fn garbage_and_zero_default_to_one() {
        assert_eq!(parse_logged_in_user_id(Some("abc")), 1);
        assert_eq!(parse_logged_in_user_id(Some("0")), 1);
        assert_eq!(parse_logged_in_user_id(Some("  ")), 1);
    }

    #[test]
    fn numeric_value_is_trimmed_and_parsed() {
        assert_eq!(parse_logged_in_user_id(Some(" 4 ")), 4);
        assert_eq!(ViewerConfig::from_raw(Some("7")).logged_in_user_id, 7);
    }
}
