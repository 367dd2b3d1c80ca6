//! HTTP-реализация шлюза к REST API блога поверх `reqwest`.
//!
//! Предоставляет [`HttpGateway`], реализующий [`PostsGateway`] из `postboard-core`,
//! и переэкспортирует модели ядра, чтобы бинарникам хватало одной зависимости.
#![warn(missing_docs)]

mod error;
mod http_gateway;

pub use http_gateway::{HttpGateway, HttpGatewayOptions};
pub use postboard_core::{
    AuthoredPost, Comment, GatewayError, GatewayResult, Post, PostDetail, PostsGateway, RawComment,
    User,
};
