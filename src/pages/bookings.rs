//! Bookings Page
//!
//! Table of bookings joined against the office list for display and for
//! the create form's option set. Admin and tenant may book and cancel;
//! overlap checks are entirely server-side.

use leptos::*;

use crate::api::ApiClient;
use crate::components::{alert, confirm, ListLoading, Modal};
use crate::model::{permits, Action, Booking, BookingPayload, Office, OfficeStatus, Screen};
use crate::pages::{format_date, parse_date_field, parse_field};
use crate::state::{list, ResourceList, SessionStore};

#[component]
pub fn BookingsPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");

    let bookings = ResourceList::<Booking>::new();
    let offices = ResourceList::<Office>::new();
    let reload = move || {
        list::load_pair(
            bookings,
            "bookings",
            api.list_bookings(),
            offices,
            "offices",
            api.list_offices(),
        )
    };
    create_effect(move |_| reload());

    let can_manage = Signal::derive(move || {
        session
            .role()
            .map_or(false, |role| permits(Screen::Bookings, Action::Create, role))
    });

    let show_modal = create_rw_signal(false);
    let (office_id, set_office_id) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (submit_error, set_submit_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let open_create = move |_| {
        set_office_id.set(String::new());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_submit_error.set(None);
        show_modal.set(true);
    };

    let on_delete = Callback::new(move |booking: Booking| {
        if !confirm("Cancel this booking?") {
            return;
        }
        spawn_local(async move {
            match api.delete_booking(booking.id).await {
                Ok(()) => reload(),
                Err(err) => alert(&err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed = (|| -> Result<BookingPayload, String> {
            Ok(BookingPayload {
                office_id: parse_field(&office_id.get_untracked(), "Select an office")?,
                start_date: parse_date_field(&start_date.get_untracked(), "Enter a start date")?,
                end_date: parse_date_field(&end_date.get_untracked(), "Enter an end date")?,
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
            match api.create_booking(payload).await {
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
                <h2 class="text-2xl font-bold text-gray-800">"Bookings"</h2>
                {move || {
                    can_manage.get().then(|| view! {
                        <button
                            on:click=open_create
                            class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                        >
                            "+ Book an office"
                        </button>
                    })
                }}
            </div>

            {move || {
                if bookings.loading.get() {
                    view! { <ListLoading /> }.into_view()
                } else {
                    let items = bookings.items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">"No bookings yet"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="bg-white rounded-lg shadow-md overflow-x-auto">
                                <table class="w-full">
                                    <thead class="bg-gray-50 border-b">
                                        <tr>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Office"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Start"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"End"</th>
                                            <th class="px-6 py-3 text-left text-xs font-medium
                                                       text-gray-500 uppercase">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-gray-200">
                                        {items.into_iter().map(|booking| {
                                            let address = offices.items.get()
                                                .iter()
                                                .find(|office| office.id == booking.office_id)
                                                .map(|office| office.address.clone())
                                                .unwrap_or_else(|| "N/A".to_string());
                                            let for_delete = booking.clone();

                                            view! {
                                                <tr>
                                                    <td class="px-6 py-4 text-sm text-gray-900">
                                                        {address}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-600">
                                                        {format_date(booking.start_date)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-600">
                                                        {format_date(booking.end_date)}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm">
                                                        {move || {
                                                            can_manage.get().then(|| {
                                                                let booking = for_delete.clone();
                                                                view! {
                                                                    <button
                                                                        on:click=move |_| on_delete.call(booking.clone())
                                                                        class="text-red-600 hover:text-red-800"
                                                                    >
                                                                        "Cancel"
                                                                    </button>
                                                                }
                                                            })
                                                        }}
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
                        title="Book an office"
                        error=submit_error
                        on_close=Callback::new(move |_| show_modal.set(false))
                    >
                        <form on:submit=on_submit class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Office"
                                </label>
                                <select
                                    prop:value=move || office_id.get()
                                    on:change=move |ev| set_office_id.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                >
                                    <option value="">"Select an office"</option>
                                    // Only vacant offices are offered for booking
                                    {move || {
                                        offices.items.get()
                                            .into_iter()
                                            .filter(|office| office.status == OfficeStatus::Vacant)
                                            .map(|office| view! {
                                                <option value=office.id.to_string()>
                                                    {format!("{} - {} / mo", office.address, office.rent)}
                                                </option>
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Start date"
                                </label>
                                <input
                                    type="date"
                                    prop:value=move || start_date.get()
                                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "End date"
                                </label>
                                <input
                                    type="date"
                                    prop:value=move || end_date.get()
                                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
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
                                    {move || if submitting.get() { "Booking..." } else { "Book" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                })
            }}
        </div>
    }
}
