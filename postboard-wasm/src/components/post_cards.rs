use leptos::prelude::*;
use postboard_core::PostId;

use super::PostRow;

/// Карточки постов для узких экранов (таблица при этом скрыта CSS).
#[component]
pub(crate) fn PostCards(rows: Memo<Vec<PostRow>>, on_view: Callback<PostId>) -> impl IntoView {
    view! {
        <div class="post-cards">
            <For
                each=move || rows.get()
                key=|row| (row.number, row.item.post.id)
                children=move |row| {
                    let post_id = row.item.post.id;
                    view! {
                        <div class="post-card">
                            <div class="post-card-header">
                                <span class="row-number">{format!("#{}", row.number)}</span>
                                <button on:click=move |_| on_view.run(post_id)>"View"</button>
                            </div>
                            <h2>{row.item.post.title.clone()}</h2>
                            <p class="author">
                                <span class="muted">"Author: "</span>
                                {row.item.author_name().to_string()}
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}
