//! Tenants Page
//!
//! Read-only card grid, visible to admin only.

use leptos::*;

use crate::api::ApiClient;
use crate::components::ListLoading;
use crate::model::Tenant;
use crate::state::{list, ResourceList};

#[component]
pub fn TenantsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let tenants = ResourceList::<Tenant>::new();
    create_effect(move |_| list::load_one(tenants, "tenants", api.list_tenants()));

    view! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Tenants"</h2>
            </div>

            {move || {
                if tenants.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = tenants.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No tenants yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2">
                                {items.into_iter().map(|tenant| view! {
                                    <div class="bg-white rounded-lg shadow-md p-6 border border-gray-200">
                                        <h3 class="font-semibold text-lg text-gray-800 mb-3">
                                            {tenant.company_name.clone()}
                                        </h3>
                                        <div class="space-y-2 text-sm text-gray-600">
                                            <p>
                                                <span class="font-medium">"Contact person: "</span>
                                                {tenant.contact_person.clone()}
                                            </p>
                                            <p>
                                                <span class="font-medium">"Phone: "</span>
                                                {tenant.phone.clone()}
                                            </p>
                                            {tenant.email.clone().map(|email| view! {
                                                <p>
                                                    <span class="font-medium">"Email: "</span>
                                                    {email}
                                                </p>
                                            })}
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
