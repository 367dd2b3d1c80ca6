use leptos::prelude::*;
use postboard_core::PostId;

use super::PostRow;

/// Таблица постов для широких экранов.
#[component]
pub(crate) fn PostTable(rows: Memo<Vec<PostRow>>, on_view: Callback<PostId>) -> impl IntoView {
    view! {
        <div class="post-table">
            <table>
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Title"</th>
                        <th>"Author"</th>
                        <th class="action">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.number, row.item.post.id)
                        children=move |row| {
                            let post_id = row.item.post.id;
                            view! {
                                <tr>
                                    <td class="row-number">{format!("#{}", row.number)}</td>
                                    <td>{row.item.post.title.clone()}</td>
                                    <td class="author">{row.item.author_name().to_string()}</td>
                                    <td class="action">
                                        <button on:click=move |_| on_view.run(post_id)>"View"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
