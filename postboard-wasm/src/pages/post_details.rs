use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use postboard_core::{
    CommentId, DetailOutcome, DetailScreen, PostId, PostsGateway, Route, fetch_detail,
};

use super::Liveness;
use crate::components::CommentRow;
use crate::components::comment_list::CommentList;
use crate::components::delete_dialog::ConfirmDeleteDialog;
use crate::state::AppState;

fn load_detail(state: &AppState, screen: RwSignal<DetailScreen>, liveness: Liveness) {
    let Some(ticket) = screen.try_update(DetailScreen::begin_load) else {
        return;
    };

    let state = state.clone();
    spawn_local(async move {
        let post_id = screen.with_untracked(DetailScreen::post_id);
        let result = fetch_detail(&state.gateway, post_id).await;
        if let Err(err) = &result {
            error!("Failed to fetch post {post_id}: {err}");
        }
        if !liveness.is_alive() {
            return;
        }
        let outcome = screen.try_update(|s| s.finish_load(ticket, result));
        if outcome == Some(DetailOutcome::NotFound) {
            state.navigate(Route::NotFound);
        }
    });
}

fn delete_comment(state: &AppState, screen: RwSignal<DetailScreen>, liveness: Liveness) {
    let Some(comment_id) = screen.try_update(DetailScreen::confirm_delete).flatten() else {
        return;
    };

    let gateway = state.gateway.clone();
    spawn_local(async move {
        let result = gateway.delete_comment(comment_id).await;
        if let Err(err) = &result {
            error!("Failed to delete comment {comment_id}: {err}");
        }
        if liveness.is_alive() {
            screen.update(|s| s.finish_delete(comment_id, result));
        }
    });
}

#[component]
pub(crate) fn PostDetails(state: AppState, post_id: PostId) -> impl IntoView {
    let screen = RwSignal::new(DetailScreen::new(post_id, state.viewer.logged_in_user_id));
    let liveness = Liveness::track();

    load_detail(&state, screen, liveness.clone());

    let on_back = Callback::new({
        let state = state.clone();
        move |_: ()| state.navigate(Route::Index)
    });
    let on_delete_click =
        Callback::new(move |comment_id: CommentId| screen.update(|s| s.request_delete(comment_id)));
    let on_cancel = Callback::new(move |_: ()| screen.update(DetailScreen::cancel_delete));
    let on_confirm = Callback::new({
        let state = state.clone();
        move |_: ()| delete_comment(&state, screen, liveness.clone())
    });

    let loading = move || screen.with(|s| s.detail().is_none());
    let title = move || screen.with(|s| s.detail().map(|d| d.post.title.clone()).unwrap_or_default());
    let body = move || screen.with(|s| s.detail().map(|d| d.post.body.clone()).unwrap_or_default());
    let author = move || {
        screen.with(|s| {
            s.detail()
                .and_then(|d| d.author.as_ref())
                .map(|u| u.name.clone())
        })
    };
    let rows = Memo::new(move |_| {
        screen.with(|s| {
            s.comments()
                .iter()
                .map(|comment| CommentRow {
                    comment: comment.clone(),
                    deletable: s.can_delete(comment),
                })
                .collect::<Vec<_>>()
        })
    });
    let dialog = Memo::new(move |_| screen.with(|s| s.dialog().clone()));

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! { <div class="spinner">"Loading..."</div> }
        >
            <article class="container narrow">
                <h1>{title}</h1>
                <Show when=move || author().is_some()>
                    <p class="muted">"Author: " {move || author().unwrap_or_default()}</p>
                </Show>
                <p class="post-body">{body}</p>

                <button class="outlined" on:click=move |_| on_back.run(())>"Back"</button>

                <h2>"💬 Comments"</h2>
                <CommentList rows=rows on_delete_click=on_delete_click />
            </article>
        </Show>

        <ConfirmDeleteDialog dialog=dialog on_cancel=on_cancel on_confirm=on_confirm />
    }
}
