//! Состояния экранов: загрузка списка, просмотр поста, диалог удаления.
//!
//! Здесь нет I/O. Слой представления запускает запросы сам, а результаты
//! передаёт сюда вместе с [`LoadTicket`], полученным при старте загрузки.

use tracing::warn;

use crate::error::GatewayResult;
use crate::models::{AuthoredPost, Comment, CommentId, PostDetail, PostId, UserId};
use crate::view::{can_delete, page_count, paginate, remove_comment, row_number};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Состояние загрузки данных экрана.
pub enum LoadStatus {
    /// Загрузка ещё не запускалась.
    #[default]
    Idle,
    /// Запросы в полёте.
    Loading,
    /// Данные получены.
    Ready,
    /// Последняя загрузка завершилась ошибкой.
    Failed(String),
}

impl LoadStatus {
    /// `true`, пока идёт загрузка.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Текст ошибки последней загрузки.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Номер поколения загрузки.
///
/// Результат с билетом старше последнего выданного отбрасывается:
/// повторные обновления не дедуплицируются, но применяется только
/// ответ на самый свежий запрос.
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default)]
struct Generation(u64);

impl Generation {
    fn next(&mut self) -> LoadTicket {
        self.0 += 1;
        LoadTicket(self.0)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0 == ticket.0
    }
}

#[derive(Debug, Clone)]
/// Экран списка постов с клиентской пагинацией.
pub struct ListScreen {
    posts: Vec<AuthoredPost>,
    page: usize,
    page_size: usize,
    status: LoadStatus,
    generation: Generation,
}

impl ListScreen {
    /// Пустой экран на первой странице.
    pub fn new(page_size: usize) -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            page_size,
            status: LoadStatus::Idle,
            generation: Generation::default(),
        }
    }

    /// Переводит экран в `Loading` и выдаёт билет для результата.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.status = LoadStatus::Loading;
        self.generation.next()
    }

    /// Применяет результат загрузки. Возвращает `false`, если билет устарел.
    ///
    /// При ошибке посты остаются прежними, ошибка видна через [`ListScreen::status`].
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: GatewayResult<Vec<AuthoredPost>>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch posts");
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Переключает страницу. Значения меньше 1 приводятся к 1,
    /// верхняя граница не проверяется.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Текущая страница.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Размер страницы.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Количество страниц для загруженных постов.
    pub fn page_count(&self) -> usize {
        page_count(self.posts.len(), self.page_size)
    }

    /// Посты текущей страницы.
    pub fn current_posts(&self) -> &[AuthoredPost] {
        paginate(&self.posts, self.page, self.page_size)
    }

    /// Сквозной номер строки `index` текущей страницы.
    pub fn row_number(&self, index: usize) -> usize {
        row_number(self.page, self.page_size, index)
    }

    /// Все загруженные посты.
    pub fn posts(&self) -> &[AuthoredPost] {
        &self.posts
    }

    /// Состояние загрузки.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// `true`, пока идёт загрузка.
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Диалог подтверждения удаления комментария.
pub enum DeleteDialog {
    /// Диалог закрыт.
    #[default]
    Closed,
    /// Ожидается подтверждение удаления.
    Confirming(CommentId),
    /// Запрос на удаление в полёте, кнопки заблокированы.
    Deleting(CommentId),
    /// Удаление не удалось; диалог открыт, можно повторить или отменить.
    Failed {
        /// Комментарий, который пытались удалить.
        comment_id: CommentId,
        /// Текст ошибки.
        message: String,
    },
}

impl DeleteDialog {
    /// Открывает диалог для комментария.
    pub fn open(&mut self, comment_id: CommentId) {
        if self.is_deleting() {
            return;
        }
        *self = Self::Confirming(comment_id);
    }

    /// Закрывает диалог, если удаление не в полёте.
    pub fn cancel(&mut self) {
        if !self.is_deleting() {
            *self = Self::Closed;
        }
    }

    /// Подтверждение: возвращает id комментария, который нужно удалить.
    pub fn confirm(&mut self) -> Option<CommentId> {
        let comment_id = match self {
            Self::Confirming(id) => *id,
            Self::Failed { comment_id, .. } => *comment_id,
            Self::Closed | Self::Deleting(_) => return None,
        };
        *self = Self::Deleting(comment_id);
        Some(comment_id)
    }

    /// Завершает удаление: при успехе закрывает диалог, при ошибке оставляет открытым.
    pub fn resolve(&mut self, result: &GatewayResult<()>) {
        let Self::Deleting(comment_id) = *self else {
            return;
        };
        *self = match result {
            Ok(()) => Self::Closed,
            Err(err) => Self::Failed {
                comment_id,
                message: err.to_string(),
            },
        };
    }

    /// `true`, если диалог показан.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// `true`, пока запрос на удаление в полёте.
    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting(_))
    }

    /// Текст ошибки последней попытки удаления.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Чем закончилась загрузка экрана поста.
pub enum DetailOutcome {
    /// Пост показан.
    Shown,
    /// Пост не получен; представление уходит на страницу 404.
    NotFound,
    /// Результат устарел и проигнорирован.
    Stale,
}

#[derive(Debug, Clone)]
/// Экран просмотра поста с комментариями.
pub struct DetailScreen {
    post_id: PostId,
    viewer: UserId,
    detail: Option<PostDetail>,
    status: LoadStatus,
    dialog: DeleteDialog,
    generation: Generation,
}

impl DetailScreen {
    /// Новый экран для поста `post_id`, зритель `viewer`.
    pub fn new(post_id: PostId, viewer: UserId) -> Self {
        Self {
            post_id,
            viewer,
            detail: None,
            status: LoadStatus::Idle,
            dialog: DeleteDialog::Closed,
            generation: Generation::default(),
        }
    }

    /// Переводит экран в `Loading` и выдаёт билет для результата.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.status = LoadStatus::Loading;
        self.generation.next()
    }

    /// Применяет результат загрузки поста.
    ///
    /// Любая ошибка, включая отсутствие поста, трактуется как "не найдено".
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: GatewayResult<PostDetail>,
    ) -> DetailOutcome {
        if !self.generation.is_current(ticket) {
            return DetailOutcome::Stale;
        }
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.status = LoadStatus::Ready;
                DetailOutcome::Shown
            }
            Err(err) => {
                warn!(post_id = self.post_id, error = %err, "failed to fetch post");
                self.detail = None;
                self.status = LoadStatus::Failed(err.to_string());
                DetailOutcome::NotFound
            }
        }
    }

    /// Открывает диалог удаления комментария.
    pub fn request_delete(&mut self, comment_id: CommentId) {
        self.dialog.open(comment_id);
    }

    /// Отменяет удаление.
    pub fn cancel_delete(&mut self) {
        self.dialog.cancel();
    }

    /// Подтверждает удаление: возвращает id, для которого нужно вызвать шлюз.
    pub fn confirm_delete(&mut self) -> Option<CommentId> {
        self.dialog.confirm()
    }

    /// Применяет ответ шлюза на удаление.
    ///
    /// Комментарий убирается из локального состояния только при успехе.
    pub fn finish_delete(&mut self, comment_id: CommentId, result: GatewayResult<()>) {
        if self.dialog != DeleteDialog::Deleting(comment_id) {
            return;
        }
        match &result {
            Ok(()) => {
                if let Some(detail) = self.detail.as_mut() {
                    remove_comment(&mut detail.comments, comment_id);
                }
            }
            Err(err) => warn!(comment_id, error = %err, "failed to delete comment"),
        }
        self.dialog.resolve(&result);
    }

    /// Можно ли показывать кнопку удаления для комментария.
    pub fn can_delete(&self, comment: &Comment) -> bool {
        can_delete(comment, self.viewer)
    }

    /// Идентификатор поста экрана.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Загруженные данные.
    pub fn detail(&self) -> Option<&PostDetail> {
        self.detail.as_ref()
    }

    /// Комментарии поста или пустой срез до загрузки.
    pub fn comments(&self) -> &[Comment] {
        self.detail
            .as_ref()
            .map(|d| d.comments.as_slice())
            .unwrap_or_default()
    }

    /// Состояние загрузки.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Диалог удаления.
    pub fn dialog(&self) -> &DeleteDialog {
        &self.dialog
    }
}
