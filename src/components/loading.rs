//! Loading Component
//!
//! Spinners for the two pending states this UI has: session rehydration
//! and a screen's list load.

use leptos::*;

/// Neutral full-screen placeholder shown while the session store is
/// rehydrating, before any authenticated/unauthenticated decision.
#[component]
pub fn RestorePlaceholder() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="text-center">
                <div class="h-10 w-10 mx-auto mb-4 animate-spin rounded-full
                            border-2 border-indigo-600 border-t-transparent" />
                <p class="text-gray-500">"Loading..."</p>
            </div>
        </div>
    }
}

/// Inline spinner shown while a screen's collection is being fetched.
#[component]
pub fn ListLoading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="h-8 w-8 animate-spin rounded-full
                        border-2 border-indigo-600 border-t-transparent" />
        </div>
    }
}
