//! App Root Component
//!
//! Builds the session store and API client, provides them to the tree,
//! and makes the single authenticated/unauthenticated routing decision.
//! The Shell renders the role-filtered sidebar and the selected resource
//! screen; the selection is plain local state, not synced to the URL.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::{RestorePlaceholder, Sidebar};
use crate::model::Screen;
use crate::pages::{
    AuthPage, BookingsPage, ContractsPage, OfficesPage, PaymentsPage, RequestsPage, TenantsPage,
};
use crate::state::SessionStore;

/// Viewport width below which the sidebar collapses into an overlay.
const MOBILE_BREAKPOINT: f64 = 768.0;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new();
    let api = ApiClient::new(session.token());
    provide_context(session);
    provide_context(api);

    // Rehydrate after the first paint, so the neutral placeholder is what
    // renders while the decision is pending.
    create_effect(move |_| session.restore());

    view! {
        {move || {
            if session.restoring.get() {
                view! { <RestorePlaceholder /> }.into_view()
            } else if session.session.get().is_some() {
                view! { <Shell /> }.into_view()
            } else {
                view! { <AuthPage /> }.into_view()
            }
        }}
    }
}

/// Authenticated frame: sidebar plus the active resource screen.
#[component]
fn Shell() -> impl IntoView {
    let active = create_rw_signal(Screen::Offices);
    let menu_open = create_rw_signal(false);
    let (mobile, set_mobile) = create_signal(viewport_is_mobile());

    // Track the breakpoint across window resizes.
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        set_mobile.set(viewport_is_mobile());
    });
    if let Some(window) = web_sys::window() {
        window.set_onresize(Some(on_resize.as_ref().unchecked_ref()));
    }
    on_resize.forget();

    view! {
        <div class="flex h-screen bg-gray-50">
            <Sidebar active=active mobile=mobile open=menu_open />

            <div class="flex-1 flex flex-col overflow-hidden">
                {move || {
                    mobile.get().then(|| view! {
                        <header class="bg-white border-b border-gray-200 p-4">
                            <button
                                on:click=move |_| menu_open.set(true)
                                class="text-gray-600 hover:text-gray-900 text-2xl leading-none"
                            >
                                "☰"
                            </button>
                        </header>
                    })
                }}

                <main class="flex-1 overflow-y-auto p-6">
                    <div class="max-w-7xl mx-auto">
                        {move || match active.get() {
                            Screen::Offices => view! { <OfficesPage /> }.into_view(),
                            Screen::Bookings => view! { <BookingsPage /> }.into_view(),
                            Screen::Contracts => view! { <ContractsPage /> }.into_view(),
                            Screen::Payments => view! { <PaymentsPage /> }.into_view(),
                            Screen::Requests => view! { <RequestsPage /> }.into_view(),
                            Screen::Tenants => view! { <TenantsPage /> }.into_view(),
                        }}
                    </div>
                </main>
            </div>
        </div>
    }
}

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < MOBILE_BREAKPOINT)
        .unwrap_or(false)
}
