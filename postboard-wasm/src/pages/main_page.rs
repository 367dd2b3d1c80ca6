use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use postboard_core::{ListScreen, POSTS_PER_PAGE, PostId, Route, fetch_index};

use super::Liveness;
use crate::components::PostRow;
use crate::components::pagination::Pagination;
use crate::components::post_cards::PostCards;
use crate::components::post_table::PostTable;
use crate::state::AppState;

fn load_posts(state: &AppState, screen: RwSignal<ListScreen>, liveness: Liveness) {
    let Some(ticket) = screen.try_update(ListScreen::begin_load) else {
        return;
    };

    let gateway = state.gateway.clone();
    spawn_local(async move {
        let result = fetch_index(&gateway).await;
        if let Err(err) = &result {
            error!("Failed to fetch posts: {err}");
        }
        if liveness.is_alive() {
            screen.update(|s| {
                s.finish_load(ticket, result);
            });
        }
    });
}

#[component]
pub(crate) fn MainPage(state: AppState) -> impl IntoView {
    let screen = RwSignal::new(ListScreen::new(POSTS_PER_PAGE));
    let liveness = Liveness::track();

    load_posts(&state, screen, liveness.clone());

    let on_refresh = Callback::new({
        let state = state.clone();
        move |_: ()| load_posts(&state, screen, liveness.clone())
    });

    let on_view = Callback::new({
        let state = state.clone();
        move |post_id: PostId| state.navigate(Route::Post(post_id))
    });

    let on_page_change = Callback::new(move |page: usize| screen.update(|s| s.set_page(page)));

    let rows = Memo::new(move |_| {
        screen.with(|s| {
            s.current_posts()
                .iter()
                .enumerate()
                .map(|(index, item)| PostRow {
                    number: s.row_number(index),
                    item: item.clone(),
                })
                .collect::<Vec<_>>()
        })
    });
    let page = Memo::new(move |_| screen.with(ListScreen::page));
    let count = Memo::new(move |_| screen.with(ListScreen::page_count));
    let loading = move || screen.with(ListScreen::is_loading);
    let error_text = move || {
        screen.with(|s| s.status().error().map(str::to_string))
    };

    view! {
        <section class="container">
            <div class="header">
                <h1>"📜 Posts"</h1>
                <button on:click=move |_| on_refresh.run(()) disabled=loading>
                    {move || if loading() { "Loading" } else { "Update" }}
                </button>
            </div>

            <Show when=move || error_text().is_some()>
                <div class="error-banner">
                    <strong>"Ошибка: "</strong>
                    {move || error_text().unwrap_or_default()}
                </div>
            </Show>

            <PostCards rows=rows on_view=on_view />
            <PostTable rows=rows on_view=on_view />

            <Pagination page=page count=count on_change=on_page_change />
        </section>
    }
}
