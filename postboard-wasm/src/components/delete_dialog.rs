use leptos::prelude::*;
use postboard_core::DeleteDialog;

/// Модальное подтверждение удаления комментария.
///
/// Пока запрос в полёте, обе кнопки заблокированы; после ошибки диалог
/// остаётся открытым и показывает её текст.
#[component]
pub(crate) fn ConfirmDeleteDialog(
    dialog: Memo<DeleteDialog>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let deleting = move || dialog.with(DeleteDialog::is_deleting);

    view! {
        <Show when=move || dialog.with(DeleteDialog::is_open)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>"Confirm deletion"</h3>
                    <p>"Are you sure you want to delete this comment? This cannot be undone."</p>
                    <Show when=move || dialog.with(|d| d.error().is_some())>
                        <div class="error-banner">
                            <strong>"Ошибка: "</strong>
                            {move || dialog.with(|d| d.error().map(str::to_string).unwrap_or_default())}
                        </div>
                    </Show>
                    <div class="dialog-actions">
                        <button on:click=move |_| on_cancel.run(()) disabled=deleting>
                            "Cancel"
                        </button>
                        <button class="danger" on:click=move |_| on_confirm.run(()) disabled=deleting>
                            {move || if deleting() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
