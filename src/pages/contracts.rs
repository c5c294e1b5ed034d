//! Contracts Page
//!
//! Read-only list. The contract lifecycle is fully server-managed; this
//! layer only displays it.

use leptos::*;

use crate::api::ApiClient;
use crate::components::ListLoading;
use crate::model::{Contract, ContractStatus};
use crate::pages::format_date;
use crate::state::{list, ResourceList};

#[component]
pub fn ContractsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let contracts = ResourceList::<Contract>::new();
    create_effect(move |_| list::load_one(contracts, "contracts", api.list_contracts()));

    view! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Contracts"</h2>
            </div>

            {move || {
                if contracts.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = contracts.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No contracts yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid gap-4">
                                {items.into_iter().map(|contract| view! {
                                    <ContractCard contract=contract />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn ContractCard(contract: Contract) -> impl IntoView {
    let badge = match contract.status {
        ContractStatus::Active => "bg-green-100 text-green-700",
        ContractStatus::Completed => "bg-gray-100 text-gray-700",
        ContractStatus::Terminated => "bg-red-100 text-red-700",
    };

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 border border-gray-200">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="font-semibold text-lg text-gray-800">
                        {format!("Contract #{}", contract.id)}
                    </h3>
                    <p class="text-sm text-gray-600 mt-1">
                        {format!("Office #{}", contract.office_id)}
                    </p>
                </div>
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", badge)>
                    {contract.status.label()}
                </span>
            </div>
            <div class="grid grid-cols-2 gap-4 text-sm">
                <div>
                    <p class="text-gray-600">"Start date:"</p>
                    <p class="font-medium">{format_date(contract.start_date)}</p>
                </div>
                <div>
                    <p class="text-gray-600">"End date:"</p>
                    <p class="font-medium">{format_date(contract.end_date)}</p>
                </div>
                <div>
                    <p class="text-gray-600">"Cost:"</p>
                    <p class="font-medium text-indigo-600">{contract.cost}</p>
                </div>
                <div>
                    <p class="text-gray-600">"Deposit:"</p>
                    <p class="font-medium">{contract.deposit}</p>
                </div>
            </div>
        </div>
    }
}
