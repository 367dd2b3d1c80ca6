//! Ошибки шлюза.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки обращения к REST API блога.
pub enum GatewayError {
    /// Сетевая ошибка: сервер недоступен, таймаут, обрыв соединения.
    #[error("transport error: {0}")]
    Transport(String),

    /// Запрошенная запись не существует.
    #[error("not found")]
    NotFound,

    /// Сервер ответил статусом вне диапазона 2xx (кроме 404).
    #[error("http error {status}: {message}")]
    Http {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст ошибки из тела ответа или описание статуса.
        message: String,
    },

    /// Тело ответа не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Результат операций шлюза.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Строит ошибку по статусу неуспешного ответа.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Self::NotFound,
            _ => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("http status {status}"));
                Self::Http { status, message }
            }
        }
    }

    /// `true`, если запись не найдена.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        assert_eq!(GatewayError::from_status(404, Some("{}".into())), GatewayError::NotFound);
    }

    #[test]
    fn blank_message_falls_back_to_status() {
        let err = GatewayError::from_status(503, Some("   ".into()));
        assert_eq!(
            err,
            GatewayError::Http {
                status: 503,
                message: "http status 503".to_string()
            }
        );
    }

    #[test]
    fn display_includes_status() {
        let err = GatewayError::from_status(500, Some("boom".into()));
        assert_eq!(err.to_string(), "http error 500: boom");
    }
}
