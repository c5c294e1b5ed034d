//! Payments Page
//!
//! Table of payments joined against the contract list for the create
//! form's option set. Overdue status is never set by direct edit here:
//! the sweep button invokes the server-side check and reports its
//! summary.

use leptos::*;

use crate::api::ApiClient;
use crate::components::{alert, ListLoading, Modal};
use crate::model::{
    permits, Action, Contract, Payment, PaymentPayload, PaymentStatus, Screen,
};
use crate::pages::{format_date, parse_date_field, parse_field};
use crate::state::{list, ResourceList, SessionStore};

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let payments = ResourceList::<Payment>::new();
    let contracts = ResourceList::<Contract>::new();
    let reload = move || {
        list::load_pair(
            payments,
            "payments",
            api.list_payments(),
            contracts,
            "contracts",
            api.list_contracts(),
        )
    };
    create_effect(move |_| reload());

    let can_create = Signal::derive(move || {
        session
            .role()
            .map_or(false, |role| permits(Screen::Payments, Action::Create, role))
    });
    let can_sweep = Signal::derive(move || {
        session.role().map_or(false, |role| {
            permits(Screen::Payments, Action::SweepOverdue, role)
        })
    });

    let show_modal = create_rw_signal(false);
    let (contract_id, set_contract_id) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (payment_date, set_payment_date) = create_signal(String::new());
    let (status, set_status) = create_signal(PaymentStatus::Unpaid.as_str().to_string());
    let (submit_error, set_submit_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);
    let (sweeping, set_sweeping) = create_signal(false);

    let open_create = move |_| {
        set_contract_id.set(String::new());
        set_amount.set(String::new());
        set_payment_date.set(String::new());
        set_status.set(PaymentStatus::Unpaid.as_str().to_string());
        set_submit_error.set(None);
        show_modal.set(true);
    };

    let on_sweep = move |_| {
        set_sweeping.set(true);
        spawn_local(async move {
            match api.check_overdue().await {
                Ok(outcome) => {
                    alert(&outcome.detail);
                    reload();
                }
                Err(err) => alert(&err.to_string()),
            }
            let _ = set_sweeping.try_set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed = (|| -> Result<PaymentPayload, String> {
            Ok(PaymentPayload {
                contract_id: parse_field(&contract_id.get_untracked(), "Select a contract")?,
                amount: parse_field(&amount.get_untracked(), "Amount must be a whole number")?,
                payment_date: parse_date_field(
                    &payment_date.get_untracked(),
                    "Enter a payment date",
                )?,
                status: PaymentStatus::parse(&status.get_untracked())
                    .unwrap_or(PaymentStatus::Unpaid),
            })
        })();
        let payload = match parsed {
            Ok(payload) => payload,
            Err(message) => {
                set_submit_error.set(Some(message));
                return;
            }
        };

        set_submit_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api.create_payment(payload).await {
                Ok(_) => {
                    let _ = show_modal.try_set(false);
                    reload();
                }
                Err(err) => {
                    let _ = set_submit_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Payments"</h2>
                <div class="flex gap-2">
                    {move || {
                        can_sweep.get().then(|| view! {
                            <button
                                on:click=on_sweep
                                disabled=move || sweeping.get()
                                class="bg-orange-600 text-white px-4 py-2 rounded-lg
                                       hover:bg-orange-700 disabled:bg-gray-400"
                            >
                                {move || if sweeping.get() { "Checking..." } else { "Check overdue" }}
                            </button>
                        })
                    }}
                    {move || {
                        can_create.get().then(|| view! {
                            <button
                                on:click=open_create
                                class="bg-indigo-600 text-white px-4 py-2 rounded-lg
                                       hover:bg-indigo-700"
                            >
                                "+ Add payment"
                            </button>
                        })
                    }}
                </div>
            </div>

            {move || {
                if payments.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = payments.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No payments yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="bg-white rounded-lg shadow-md overflow-x-auto">
                                <table class="w-full">
                                    <thead class="bg-gray-50 border-b">
                                        <tr>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Contract"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Amount"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Date"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-gray-200">
                                        {items.into_iter().map(|payment| {
                                            let badge = match payment.status {
                                                PaymentStatus::Paid => "bg-green-100 text-green-700",
                                                PaymentStatus::Overdue => "bg-red-100 text-red-700",
                                                PaymentStatus::Unpaid => "bg-yellow-100 text-yellow-700",
                                            };

                                            view! {
                                                <tr>
                                                    <td class="px-6 py-4 text-sm text-gray-900">
                                                        {format!("#{}", payment.contract_id)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm font-medium text-gray-900">
                                                        {payment.amount}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-600">
                                                        {format_date(payment.payment_date)}
                                                    </td>
                                                    <td class="px-6 py-4">
                                                        <span class=format!(
                                                            "px-3 py-1 rounded-full text-xs font-medium {}",
                                                            badge
                                                        )>
                                                            {payment.status.label()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_view()
                    }
                }
            }}

            {move || {
                show_modal.get().then(|| view! {
                    <Modal
                        title="New payment"
                        error=submit_error
                        on_close=Callback::new(move |_| show_modal.set(false))
                    >
                        <form on:submit=on_submit class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Contract"
                                </label>
                                <select
                                    prop:value=move || contract_id.get()
                                    on:change=move |ev| set_contract_id.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                >
                                    <option value="">"Select a contract"</option>
                                    {move || {
                                        contracts.items.get()
                                            .into_iter()
                                            .map(|contract| view! {
                                                <option value=contract.id.to_string()>
                                                    {format!("Contract #{} - {}", contract.id, contract.cost)}
                                                </option>
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Amount"
                                </label>
                                <input
                                    type="number"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Payment date"
                                </label>
                                <input
                                    type="date"
                                    prop:value=move || payment_date.get()
                                    on:input=move |ev| set_payment_date.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Status"
                                </label>
                                // Overdue is reserved for the server-side sweep
                                <select
                                    prop:value=move || status.get()
                                    on:change=move |ev| set_status.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                >
                                    <option value="unpaid">"Unpaid"</option>
                                    <option value="paid">"Paid"</option>
                                </select>
                            </div>
                            <div class="flex gap-2 pt-4">
                                <button
                                    type="button"
                                    on:click=move |_| show_modal.set(false)
                                    class="flex-1 px-4 py-2 border border-gray-300 rounded-lg
                                           hover:bg-gray-50"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="flex-1 px-4 py-2 bg-indigo-600 text-white rounded-lg
                                           hover:bg-indigo-700 disabled:bg-gray-400"
                                >
                                    {move || if submitting.get() { "Saving..." } else { "Create" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                })
            }}
        </div>
    }
}
