//! Authentication Page
//!
//! Login and tenant self-registration on one card. Credential failures
//! from the store render inline above the form.

use leptos::*;

use crate::api::client::RegisterPayload;
use crate::api::ApiClient;
use crate::state::SessionStore;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let (registering, set_registering) = create_signal(false);
    let (phone, set_phone) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (company_name, set_company_name) = create_signal(String::new());
    let (contact_person, set_contact_person) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = if registering.get_untracked() {
                // The phone number doubles as the login username.
                session
                    .register(
                        api,
                        RegisterPayload {
                            username: phone.get_untracked(),
                            password: password.get_untracked(),
                            company_name: company_name.get_untracked(),
                            contact_person: contact_person.get_untracked(),
                        },
                    )
                    .await
            } else {
                session
                    .login(api, phone.get_untracked(), password.get_untracked())
                    .await
            };

            // On success the session signal flips and the entry router
            // swaps this page for the shell.
            if let Err(err) = result {
                let _ = set_error.try_set(Some(err.to_string()));
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100
                    flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-xl w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-800">"Office CRM"</h1>
                    <p class="text-gray-600 mt-2">
                        {move || if registering.get() { "Create an account" } else { "Sign in" }}
                    </p>
                </div>

                {move || {
                    error.get().map(|message| view! {
                        <div class="bg-red-50 border border-red-200 text-red-700
                                    px-4 py-3 rounded-lg mb-4 text-sm">
                            {message}
                        </div>
                    })
                }}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Phone"</label>
                        <input
                            type="tel"
                            placeholder="+7 (999) 123-45-67"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg
                                   focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg
                                   focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            required
                        />
                    </div>

                    {move || {
                        registering.get().then(|| view! {
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">
                                    "Company name"
                                </label>
                                <input
                                    type="text"
                                    prop:value=move || company_name.get()
                                    on:input=move |ev| set_company_name.set(event_target_value(&ev))
                                    class="w-full px-4 py-2 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">
                                    "Contact person"
                                </label>
                                <input
                                    type="text"
                                    prop:value=move || contact_person.get()
                                    on:input=move |ev| set_contact_person.set(event_target_value(&ev))
                                    class="w-full px-4 py-2 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                                    required
                                />
                            </div>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-indigo-600 text-white py-3 rounded-lg font-medium
                               hover:bg-indigo-700 disabled:bg-gray-400 transition-colors"
                    >
                        {move || {
                            if submitting.get() {
                                "Please wait..."
                            } else if registering.get() {
                                "Register"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <button
                        on:click=move |_| {
                            set_registering.set(!registering.get_untracked());
                            set_error.set(None);
                        }
                        class="text-indigo-600 hover:text-indigo-700 text-sm font-medium"
                    >
                        {move || {
                            if registering.get() {
                                "Already have an account? Sign in"
                            } else {
                                "No account? Register"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
