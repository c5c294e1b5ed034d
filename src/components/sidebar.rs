//! Sidebar Component
//!
//! Role-filtered navigation menu. On narrow viewports it collapses into a
//! dismissible overlay panel whose open state is independent of the
//! selected screen.

use leptos::*;

use crate::model::{Role, Screen};
use crate::state::SessionStore;

#[component]
pub fn Sidebar(
    active: RwSignal<Screen>,
    #[prop(into)] mobile: Signal<bool>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");

    let role = move || session.role();

    view! {
        // Backdrop dismisses the overlay on narrow viewports
        {move || {
            (mobile.get() && open.get()).then(|| view! {
                <div
                    class="fixed inset-0 bg-black/50 z-40"
                    on:click=move |_| open.set(false)
                />
            })
        }}

        {move || {
            let visible = !mobile.get() || open.get();
            visible.then(|| {
                let aside_class = if mobile.get() {
                    "fixed inset-y-0 left-0 z-50 w-64 bg-indigo-900 text-white flex flex-col"
                } else {
                    "relative w-64 bg-indigo-900 text-white flex flex-col"
                };

                view! {
                    <aside class=aside_class>
                        <div class="p-6 border-b border-indigo-800">
                            <div class="flex items-center justify-between">
                                <h1 class="text-xl font-bold">"Office CRM"</h1>
                                {move || {
                                    mobile.get().then(|| view! {
                                        <button
                                            on:click=move |_| open.set(false)
                                            class="text-indigo-300 hover:text-white"
                                        >
                                            "✕"
                                        </button>
                                    })
                                }}
                            </div>
                            <p class="text-indigo-300 text-sm mt-2">
                                {move || role().map(Role::label).unwrap_or_default()}
                            </p>
                        </div>

                        <nav class="flex-1 p-4 space-y-2">
                            {move || {
                                let current = role();
                                Screen::ALL
                                    .into_iter()
                                    .filter(|screen| {
                                        current.map_or(false, |r| screen.allows(r))
                                    })
                                    .map(|screen| view! {
                                        <MenuItem screen=screen active=active open=open mobile=mobile />
                                    })
                                    .collect_view()
                            }}
                        </nav>

                        <div class="p-4 border-t border-indigo-800">
                            <button
                                on:click=move |_| session.logout()
                                class="w-full px-4 py-3 text-left text-indigo-200
                                       hover:bg-indigo-800 hover:text-white rounded-lg
                                       font-medium transition-colors"
                            >
                                "Log out"
                            </button>
                        </div>
                    </aside>
                }
            })
        }}
    }
}

#[component]
fn MenuItem(
    screen: Screen,
    active: RwSignal<Screen>,
    open: RwSignal<bool>,
    #[prop(into)] mobile: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| {
                active.set(screen);
                if mobile.get() {
                    open.set(false);
                }
            }
            class=move || {
                let base = "w-full px-4 py-3 rounded-lg text-left font-medium transition-colors";
                if active.get() == screen {
                    format!("{} bg-indigo-800 text-white", base)
                } else {
                    format!("{} text-indigo-200 hover:bg-indigo-800 hover:text-white", base)
                }
            }
        >
            {screen.label()}
        </button>
    }
}
