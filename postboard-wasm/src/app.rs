use leptos::ev;
use leptos::prelude::*;
use postboard_core::Route;

use crate::pages::main_page::MainPage;
use crate::pages::not_found::NotFound;
use crate::pages::post_details::PostDetails;
use crate::router;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // Кнопки "назад/вперёд" браузера.
    let route = state.route;
    let _popstate = window_event_listener(ev::popstate, move |_| {
        route.set(Route::parse(&router::current_path()));
    });

    view! {
        <main class="page">
            {move || match state.route.get() {
                Route::Index => view! { <MainPage state=state.clone() /> }.into_any(),
                Route::Post(post_id) => {
                    view! { <PostDetails state=state.clone() post_id=post_id /> }.into_any()
                }
                Route::NotFound => view! { <NotFound state=state.clone() /> }.into_any(),
            }}
        </main>
    }
}
