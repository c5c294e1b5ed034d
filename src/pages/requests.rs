//! Requests Page
//!
//! Maintenance/service tickets. Admin and tenant create and delete; staff
//! advance the status forward one step per action, never backward and
//! never skipping a step.

use leptos::*;

use crate::api::ApiClient;
use crate::components::{alert, confirm, ListLoading, Modal};
use crate::model::{
    permits, Action, Contract, MaintenanceRequest, RequestPayload, RequestStatus,
    RequestStatusPatch, Screen,
};
use crate::pages::{format_date, parse_field};
use crate::state::{list, ResourceList, SessionStore};

#[component]
pub fn RequestsPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let requests = ResourceList::<MaintenanceRequest>::new();
    let contracts = ResourceList::<Contract>::new();
    let reload = move || {
        list::load_pair(
            requests,
            "requests",
            api.list_requests(),
            contracts,
            "contracts",
            api.list_contracts(),
        )
    };
    create_effect(move |_| reload());

    let can_manage = Signal::derive(move || {
        session
            .role()
            .map_or(false, |role| permits(Screen::Requests, Action::Create, role))
    });
    let can_advance = Signal::derive(move || {
        session.role().map_or(false, |role| {
            permits(Screen::Requests, Action::AdvanceStatus, role)
        })
    });

    let show_modal = create_rw_signal(false);
    let (contract_id, set_contract_id) = create_signal(String::new());
    let (kind, set_kind) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (submit_error, set_submit_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let open_create = move |_| {
        set_contract_id.set(String::new());
        set_kind.set(String::new());
        set_description.set(String::new());
        set_submit_error.set(None);
        show_modal.set(true);
    };

    // One step forward per click; RequestStatus::next is the whole rule.
    let on_advance = Callback::new(move |request: MaintenanceRequest| {
        let Some(next) = request.status.next() else {
            return;
        };
        spawn_local(async move {
            match api
                .update_request_status(request.id, RequestStatusPatch { status: next })
                .await
            {
                Ok(_) => reload(),
                Err(err) => alert(&err.to_string()),
            }
        });
    });

    let on_delete = Callback::new(move |request: MaintenanceRequest| {
        if !confirm("Delete this request?") {
            return;
        }
        spawn_local(async move {
            match api.delete_request(request.id).await {
                Ok(()) => reload(),
                Err(err) => alert(&err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed = (|| -> Result<RequestPayload, String> {
            Ok(RequestPayload {
                contract_id: parse_field(&contract_id.get_untracked(), "Select a contract")?,
                kind: kind.get_untracked(),
                description: description.get_untracked(),
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
            match api.create_request(payload).await {
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
                <h2 class="text-2xl font-bold text-gray-800">"Requests"</h2>
                {move || {
                    can_manage.get().then(|| view! {
                        <button
                            on:click=open_create
                            class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                        >
                            "+ New request"
                        </button>
                    })
                }}
            </div>

            {move || {
                if requests.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = requests.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No requests yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid gap-4">
                                {items.into_iter().map(|request| view! {
                                    <RequestCard
                                        request=request
                                        can_manage=can_manage
                                        can_advance=can_advance
                                        on_advance=on_advance
                                        on_delete=on_delete
                                    />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}

            {move || {
                show_modal.get().then(|| view! {
                    <Modal
                        title="New request"
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
                                                    {format!("Contract #{}", contract.id)}
                                                </option>
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Type"
                                </label>
                                <input
                                    type="text"
                                    placeholder="e.g. Repair, Cleaning"
                                    prop:value=move || kind.get()
                                    on:input=move |ev| set_kind.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Description"
                                </label>
                                <textarea
                                    rows="4"
                                    placeholder="Describe the problem"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
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

/// Single request card
#[component]
fn RequestCard(
    request: MaintenanceRequest,
    #[prop(into)] can_manage: Signal<bool>,
    #[prop(into)] can_advance: Signal<bool>,
    on_advance: Callback<MaintenanceRequest>,
    on_delete: Callback<MaintenanceRequest>,
) -> impl IntoView {
    let badge = match request.status {
        RequestStatus::New => "bg-blue-100 text-blue-700",
        RequestStatus::InProgress => "bg-yellow-100 text-yellow-700",
        RequestStatus::Done => "bg-green-100 text-green-700",
    };

    let advance_label = request.status.advance_label();
    let for_advance = request.clone();
    let for_delete = request.clone();

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 border border-gray-200">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="font-semibold text-lg text-gray-800">{request.kind.clone()}</h3>
                    <p class="text-sm text-gray-600 mt-1">
                        {format!("Contract #{}", request.contract_id)}
                    </p>
                </div>
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", badge)>
                    {request.status.label()}
                </span>
            </div>
            <p class="text-gray-700 mb-4">{request.description.clone()}</p>
            <p class="text-sm text-gray-500 mb-4">
                {format!("Created: {}", format_date(request.created_at))}
            </p>
            <div class="flex gap-2">
                {move || {
                    (can_advance.get() && advance_label.is_some()).then(|| {
                        let request = for_advance.clone();
                        view! {
                            <button
                                on:click=move |_| on_advance.call(request.clone())
                                class="px-4 py-2 bg-green-600 text-white rounded-lg
                                       hover:bg-green-700 text-sm"
                            >
                                {advance_label.unwrap_or_default()}
                            </button>
                        }
                    })
                }}
                {move || {
                    can_manage.get().then(|| {
                        let request = for_delete.clone();
                        view! {
                            <button
                                on:click=move |_| on_delete.call(request.clone())
                                class="px-4 py-2 bg-red-600 text-white rounded-lg
                                       hover:bg-red-700 text-sm"
                            >
                                "Delete"
                            </button>
                        }
                    })
                }}
            </div>
        </div>
    }
}
