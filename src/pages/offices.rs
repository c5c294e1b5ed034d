//! Offices Page
//!
//! Card grid of offices with admin-only create/edit/delete.

use leptos::*;

use crate::api::ApiClient;
use crate::components::{alert, confirm, ListLoading, Modal};
use crate::model::{permits, Action, Office, OfficePayload, OfficeStatus, Screen};
use crate::pages::parse_field;
use crate::state::{list, ResourceList, SessionStore};

#[component]
pub fn OfficesPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let offices = ResourceList::<Office>::new();
    let reload = move || list::load_one(offices, "offices", api.list_offices());
    create_effect(move |_| reload());

    let can_manage = Signal::derive(move || {
        session
            .role()
            .map_or(false, |role| permits(Screen::Offices, Action::Edit, role))
    });

    // Modal form state
    let show_modal = create_rw_signal(false);
    let editing = create_rw_signal(None::<Office>);
    let (address, set_address) = create_signal(String::new());
    let (area, set_area) = create_signal(String::new());
    let (rooms, set_rooms) = create_signal(String::new());
    let (rent, set_rent) = create_signal(String::new());
    let (status, set_status) = create_signal(OfficeStatus::Vacant.as_str().to_string());
    let (submit_error, set_submit_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let open_create = move |_| {
        editing.set(None);
        set_address.set(String::new());
        set_area.set(String::new());
        set_rooms.set(String::new());
        set_rent.set(String::new());
        set_status.set(OfficeStatus::Vacant.as_str().to_string());
        set_submit_error.set(None);
        show_modal.set(true);
    };

    let open_edit = Callback::new(move |office: Office| {
        set_address.set(office.address.clone());
        set_area.set(office.area.to_string());
        set_rooms.set(office.rooms.to_string());
        set_rent.set(office.rent.to_string());
        set_status.set(office.status.as_str().to_string());
        editing.set(Some(office));
        set_submit_error.set(None);
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |office: Office| {
        if !confirm("Delete this office?") {
            return;
        }
        spawn_local(async move {
            match api.delete_office(office.id).await {
                Ok(()) => reload(),
                Err(err) => alert(&err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed = (|| -> Result<OfficePayload, String> {
            Ok(OfficePayload {
                address: address.get_untracked(),
                area: parse_field(&area.get_untracked(), "Area must be a whole number")?,
                rooms: parse_field(&rooms.get_untracked(), "Rooms must be a whole number")?,
                rent: parse_field(&rent.get_untracked(), "Rent must be a whole number")?,
                status: OfficeStatus::parse(&status.get_untracked())
                    .unwrap_or(OfficeStatus::Vacant),
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
            let result = match editing.get_untracked() {
                Some(office) => api.update_office(office.id, payload).await.map(|_| ()),
                None => api.create_office(payload).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    let _ = show_modal.try_set(false);
                    reload();
                }
                Err(err) => {
                    // Modal stays open; entered values stay put.
                    let _ = set_submit_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Offices"</h2>
                {move || {
                    can_manage.get().then(|| view! {
                        <button
                            on:click=open_create
                            class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                        >
                            "+ Add office"
                        </button>
                    })
                }}
            </div>

            {move || {
                if offices.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = offices.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No offices yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                {items.into_iter().map(|office| view! {
                                    <OfficeCard
                                        office=office
                                        can_manage=can_manage
                                        on_edit=open_edit
                                        on_delete=on_delete
                                    />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}

            {move || {
                show_modal.get().then(|| {
                    let title = if editing.get().is_some() { "Edit office" } else { "New office" };
                    view! {
                    <Modal
                        title=title
                        error=submit_error
                        on_close=Callback::new(move |_| show_modal.set(false))
                    >
                        <form on:submit=on_submit class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Address"
                                </label>
                                <input
                                    type="text"
                                    prop:value=move || address.get()
                                    on:input=move |ev| set_address.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Area (sq m)"
                                </label>
                                <input
                                    type="number"
                                    prop:value=move || area.get()
                                    on:input=move |ev| set_area.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Rooms"
                                </label>
                                <input
                                    type="number"
                                    prop:value=move || rooms.get()
                                    on:input=move |ev| set_rooms.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Rent"
                                </label>
                                <input
                                    type="number"
                                    prop:value=move || rent.get()
                                    on:input=move |ev| set_rent.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Status"
                                </label>
                                <select
                                    prop:value=move || status.get()
                                    on:change=move |ev| set_status.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                >
                                    <option value="vacant">"Vacant"</option>
                                    <option value="occupied">"Occupied"</option>
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
                                    {move || {
                                        if submitting.get() {
                                            "Saving..."
                                        } else if editing.get().is_some() {
                                            "Save"
                                        } else {
                                            "Create"
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                    }
                })
            }}
        </div>
    }
}

/// Single office card
#[component]
fn OfficeCard(
    office: Office,
    #[prop(into)] can_manage: Signal<bool>,
    on_edit: Callback<Office>,
    on_delete: Callback<Office>,
) -> impl IntoView {
    let badge = match office.status {
        OfficeStatus::Vacant => "bg-green-100 text-green-700",
        OfficeStatus::Occupied => "bg-red-100 text-red-700",
    };

    let for_edit = office.clone();
    let for_delete = office.clone();

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 border border-gray-200">
            <div class="flex justify-between items-start mb-4">
                <h3 class="font-semibold text-lg text-gray-800">{office.address.clone()}</h3>
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", badge)>
                    {office.status.label()}
                </span>
            </div>
            <div class="space-y-2 text-sm text-gray-600">
                <p>{format!("Area: {} sq m", office.area)}</p>
                <p>{format!("Rooms: {}", office.rooms)}</p>
                <p class="font-semibold text-gray-800">{format!("{} / mo", office.rent)}</p>
            </div>
            {move || {
                can_manage.get().then(|| {
                    let edit = for_edit.clone();
                    let delete = for_delete.clone();
                    view! {
                        <div class="flex gap-2 mt-4">
                            <button
                                on:click=move |_| on_edit.call(edit.clone())
                                class="flex-1 bg-blue-50 text-blue-600 px-3 py-2 rounded-lg
                                       hover:bg-blue-100"
                            >
                                "Edit"
                            </button>
                            <button
                                on:click=move |_| on_delete.call(delete.clone())
                                class="flex-1 bg-red-50 text-red-600 px-3 py-2 rounded-lg
                                       hover:bg-red-100"
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
