pub(crate) mod comment_list;
pub(crate) mod delete_dialog;
pub(crate) mod pagination;
pub(crate) mod post_cards;
pub(crate) mod post_table;

use postboard_core::{AuthoredPost, Comment};

/// Строка списка постов со сквозным номером.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PostRow {
    pub(crate) number: usize,
    pub(crate) item: AuthoredPost,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommentRow {
    pub(crate) comment: Comment,
    pub(crate) deletable: bool,
}
