//! Modal Component
//!
//! Chrome shared by every create/edit form modal, plus the browser
//! confirm/alert dialogs used for deletes and blocking mutation errors.

use leptos::*;

/// Form modal overlaying the list. Renders the title bar, an inline error
/// banner while a submit failure is pending, and the caller's form as
/// children. Closing is the caller's decision; a failed submit leaves the
/// modal open with entered values intact.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg p-6 w-full max-w-md">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-xl font-bold text-gray-800">{title}</h3>
                    <button
                        on:click=move |_| on_close.call(())
                        class="text-gray-400 hover:text-gray-600"
                    >
                        "✕"
                    </button>
                </div>

                {move || {
                    error.get().map(|message| view! {
                        <div class="bg-red-50 border border-red-200 text-red-700
                                    px-4 py-3 rounded-lg mb-4 text-sm">
                            {message}
                        </div>
                    })
                }}

                {children()}
            </div>
        </div>
    }
}

/// Explicit user confirmation; no call is issued unless this returns true.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Blocking alert for mutation failures and sweep outcomes.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
