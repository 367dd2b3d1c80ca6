//! Общее ядро клиента блога: модели, контракт шлюза к REST API,
//! view-model'и агрегации и пагинации, состояния экранов.
//!
//! Крейт не зависит от транспорта и рантайма, поэтому используется
//! и в `postboard-cli` (через `reqwest`), и в `postboard-wasm` (через `gloo-net`).
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod models;
pub mod route;
pub mod screen;
pub mod view;

pub use config::{DEFAULT_API_BASE_URL, POSTS_PER_PAGE, ViewerConfig, parse_logged_in_user_id};
pub use error::{GatewayError, GatewayResult};
pub use flow::{fetch_detail, fetch_index};
pub use gateway::PostsGateway;
pub use models::{AuthoredPost, Comment, CommentId, Post, PostDetail, PostId, RawComment, User, UserId};
pub use route::Route;
pub use screen::{DeleteDialog, DetailOutcome, DetailScreen, ListScreen, LoadStatus, LoadTicket};
pub use view::{
    SYNTHETIC_USER_BASE, can_delete, decorate_comments, join_posts_with_authors, page_count,
    paginate, remove_comment, row_number,
};
