use postboard_core::GatewayError;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
    message: Option<String>,
}

/// Ошибка по статусу неуспешного ответа; текст берётся из тела, если он там есть.
pub(crate) async fn decode_error(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let message = match response.json::<ErrorResponseDto>().await {
        Ok(body) => body.error.or(body.message),
        Err(_) => None,
    };
    from_http_status(status, message)
}

pub(crate) fn from_http_status(status: StatusCode, message: Option<String>) -> GatewayError {
    GatewayError::from_status(status.as_u16(), message)
}

pub(crate) fn from_reqwest(err: reqwest::Error) -> GatewayError {
    if let Some(status) = err.status() {
        return from_http_status(status, None);
    }
    if err.is_decode() {
        return GatewayError::Decode(err.to_string());
    }
    GatewayError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let err = from_http_status(StatusCode::NOT_FOUND, Some("missing".into()));
        assert_eq!(err, GatewayError::NotFound);
    }

    #[test]
    fn server_error_keeps_message() {
        let err = from_http_status(StatusCode::BAD_GATEWAY, Some("upstream down".into()));
        assert_eq!(
            err,
            GatewayError::Http {
                status: 502,
                message: "upstream down".into()
            }
        );
    }
}
