use leptos::prelude::*;
use postboard_core::Route;

use crate::state::AppState;

#[component]
pub(crate) fn NotFound(state: AppState) -> impl IntoView {
    let on_home = move |_| state.navigate(Route::Index);

    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>
                "The page you are looking for might have been removed or is temporarily unavailable."
            </p>
            <button on:click=on_home>"Back to Home"</button>
        </section>
    }
}
