use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use smilebook::{
    async_callback,
    data::{CreateAppointmentRequest, Dentist},
    log,
};

use crate::components::{TextField, Toast, ToastMessage};
use crate::providers::api;
use crate::session;

/// The API expects a bare `YYYY-MM-DD`; drop any time suffix.
fn normalize_date(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_string()
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let api = use_memo((), |_| api::create());

    // Form state
    let user_name = use_state(String::new);
    let dentist_name = use_state(String::new);
    let appointment_date = use_state(String::new);
    let dentists = use_state(Vec::<Dentist>::new);

    // UI state
    let processing = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    // Prefill the email from the stored token's claims.
    {
        let user_name = user_name.clone();
        use_effect_with((), move |_| {
            if let Some(claims) = session::current_claims() {
                user_name.set(claims.email);
            }
        });
    }

    // Load the dentist list once; a failure just leaves the list empty.
    {
        let api = api.clone();
        let dentists = dentists.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.available_dentists().await {
                    Ok(response) => dentists.set(response.data),
                    Err(err) => log::error!("failed to fetch dentists: {err}"),
                }
            });
        });
    }

    let on_dentist_change = {
        let dentist_name = dentist_name.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                dentist_name.set(select.value());
            }
        })
    };

    let on_date_input = {
        let appointment_date = appointment_date.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                appointment_date.set(input.value());
            }
        })
    };

    let on_submit = async_callback!([
        api,
        user_name,
        dentist_name,
        appointment_date,
        processing,
        toast,
    ] |e: SubmitEvent| {
        e.prevent_default();

        if dentist_name.is_empty() || appointment_date.is_empty() {
            toast.set(Some(ToastMessage::error(
                "Select a dentist and an appointment date.",
            )));
            return;
        }
        if *processing {
            return;
        }

        processing.set(true);

        let request = CreateAppointmentRequest {
            user_name: (*user_name).clone(),
            dentist_name: (*dentist_name).clone(),
            appointment_date: normalize_date(&appointment_date),
        };

        match api.create_appointment(&request).await {
            Ok(response) => {
                processing.set(false);
                let message = response
                    .message
                    .unwrap_or_else(|| "Appointment booked!".to_string());
                toast.set(Some(ToastMessage::success(message)));

                // Reset the form
                dentist_name.set(String::new());
                appointment_date.set(String::new());
            }
            Err(err) => {
                processing.set(false);
                toast.set(Some(ToastMessage::error(err.to_string())));
            }
        }
    });

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-50 to-blue-200 p-4">
            <div class="w-full max-w-md">
                <h1 class="text-2xl font-bold text-gray-800 mb-6">{ "Book an Appointment" }</h1>

                <form onsubmit={on_submit}>
                    <TextField
                        label="Your Email"
                        value={(*user_name).clone()}
                        oninput={Callback::noop()}
                        readonly=true
                    />

                    <div class="mb-4">
                        <label class="block text-sm font-medium text-gray-700 mb-1">{ "Select Dentist" }</label>
                        <select
                            class="w-full px-3 py-2 border border-gray-300 rounded bg-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                            onchange={on_dentist_change}
                            required=true
                        >
                            <option value="" selected={dentist_name.is_empty()}>{ "-- choose --" }</option>
                            {
                                dentists.iter().map(|dentist| html! {
                                    <option
                                        value={dentist.full_name.clone()}
                                        selected={*dentist_name == dentist.full_name}
                                    >
                                        { &dentist.full_name }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>

                    <TextField
                        label="Appointment Date"
                        input_type="date"
                        value={(*appointment_date).clone()}
                        oninput={on_date_input}
                        required=true
                    />

                    <button
                        type="submit"
                        class="w-full mt-2 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled={*processing}
                    >
                        { if *processing { "Booking..." } else { "Confirm Appointment" } }
                    </button>
                </form>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
