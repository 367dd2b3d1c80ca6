use leptos::prelude::*;

use crate::pager::pager_buttons;

#[component]
pub(crate) fn Pagination(
    page: Memo<usize>,
    count: Memo<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            {move || {
                pager_buttons(page.get(), count.get())
                    .into_iter()
                    .map(|button| {
                        let target = button.target;
                        view! {
                            <button
                                class:current=button.current
                                disabled=button.disabled
                                on:click=move |_| on_change.run(target)
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
