use leptos::prelude::*;
use postboard_core::CommentId;

use super::CommentRow;

#[component]
pub(crate) fn CommentList(
    rows: Memo<Vec<CommentRow>>,
    on_delete_click: Callback<CommentId>,
) -> impl IntoView {
    view! {
        <ul class="comments">
            <For
                each=move || rows.get()
                key=|row| (row.comment.id, row.deletable)
                children=move |row| {
                    let comment_id = row.comment.id;
                    let deletable = row.deletable;
                    view! {
                        <li class="comment">
                            <span class="muted">{format!("#{comment_id}")}</span>
                            <div class="comment-body">
                                <strong>{row.comment.name.clone()}</strong>
                                <p>{row.comment.body.clone()}</p>
                            </div>
                            <Show when=move || deletable>
                                <button
                                    class="danger"
                                    on:click=move |_| on_delete_click.run(comment_id)
                                >
                                    "Delete"
                                </button>
                            </Show>
                        </li>
                    }
                }
            />
        </ul>
    }
}
