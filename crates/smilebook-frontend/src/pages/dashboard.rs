use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::prelude::*;

use smilebook::api::ApiClient;
use smilebook::{
    auth,
    data::{Appointment, AppointmentStatus, UpdateAppointmentRequest},
    log,
};

use crate::components::{CalendarView, Toast, ToastMessage};
use crate::providers::api::{self, Api};
use crate::routes::Route;
use crate::session;

/// Render an API date like the locale-ish `MM/DD/YYYY` the rest of the UI
/// uses; fall back to the raw string if it does not parse.
fn format_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

async fn fetch_appointments<C: ApiClient>(
    api: &Api<C>,
    email: &str,
) -> Result<Vec<Appointment>, String> {
    match api.user_appointments(email).await {
        Ok(response) => Ok(response.data),
        // No appointments yet is not an error.
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        Err(err) => {
            log::error!("failed to load appointments: {err}");
            Err("Failed to load appointments.".to_string())
        }
    }
}

/// Request a status transition, then re-fetch the list exactly once. The
/// re-fetch happens whether or not the update succeeded, so the table
/// always converges to the server's state.
async fn update_and_refresh<C: ApiClient>(
    api: &Api<C>,
    request: &UpdateAppointmentRequest,
    email: &str,
) -> (Option<String>, Result<Vec<Appointment>, String>) {
    let update_error = api.update_appointment(request).await.err().map(|err| {
        log::error!("error updating appointment: {err}");
        err.to_string()
    });
    (update_error, fetch_appointments(api, email).await)
}

fn apply_list(
    result: Result<Vec<Appointment>, String>,
    appointments: &UseStateHandle<Vec<Appointment>>,
    error: &UseStateHandle<Option<String>>,
) {
    match result {
        Ok(list) => {
            appointments.set(list);
            error.set(None);
        }
        Err(message) => error.set(Some(message)),
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator().unwrap();

    let user_email = use_state(String::new);
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);

    // Decode the email from the stored token and load the list. The route
    // guard already vetted the session, but a token can still go missing or
    // rot between renders; treat that exactly like the guard does.
    {
        let api = api.clone();
        let navigator = navigator.clone();
        let user_email = user_email.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let Some(token) = session::load_token() else {
                navigator.replace(&Route::Login);
                return;
            };
            match auth::decode_claims(&token) {
                Ok(claims) => {
                    user_email.set(claims.email.clone());
                    wasm_bindgen_futures::spawn_local(async move {
                        loading.set(true);
                        apply_list(
                            fetch_appointments(&api, &claims.email).await,
                            &appointments,
                            &error,
                        );
                        loading.set(false);
                    });
                }
                Err(err) => {
                    log::warn!("invalid token, logging out: {err}");
                    session::clear_token();
                    navigator.replace(&Route::Login);
                }
            }
        });
    }

    // Cancel/finish. The list is re-fetched after the update call whether it
    // succeeded or not, so the table always shows the server's truth.
    let on_update = {
        let api = api.clone();
        let user_email = user_email.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();
        let error = error.clone();
        let toast = toast.clone();
        Callback::from(
            move |(appointment, status): (Appointment, AppointmentStatus)| {
                let Some(reference_id) = appointment.reference_id.clone() else {
                    toast.set(Some(ToastMessage::error(
                        "This appointment has no reference and cannot be updated.",
                    )));
                    return;
                };
                let api = api.clone();
                let email = (*user_email).clone();
                let appointments = appointments.clone();
                let loading = loading.clone();
                let error = error.clone();
                let toast = toast.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let request = UpdateAppointmentRequest {
                        reference_id,
                        dentist_name: appointment.dentist_name.clone(),
                        appointment_date: appointment.appointment_date.clone(),
                        status,
                    };
                    loading.set(true);
                    let (update_error, list) = update_and_refresh(&api, &request, &email).await;
                    if let Some(message) = update_error {
                        toast.set(Some(ToastMessage::error(message)));
                    }
                    apply_list(list, &appointments, &error);
                    loading.set(false);
                });
            },
        )
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session::clear_token();
            navigator.push(&Route::Login);
        })
    };

    let go_book = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Book))
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let list = if *loading {
        html! { <p class="text-gray-500 py-8 text-center">{ "Loading appointments..." }</p> }
    } else if let Some(message) = &*error {
        html! { <p class="text-red-600 py-8 text-center">{ message }</p> }
    } else if appointments.is_empty() {
        html! { <p class="py-8 text-center">{ "No appointments found." }</p> }
    } else {
        html! {
            <table class="w-full bg-white rounded shadow text-sm">
                <thead class="bg-blue-50">
                    <tr>
                        <th class="text-left px-3 py-2">{ "Dentist" }</th>
                        <th class="text-left px-3 py-2">{ "Date" }</th>
                        <th class="text-left px-3 py-2">{ "Status" }</th>
                        <th class="text-left px-3 py-2">{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        appointments.iter().map(|appointment| {
                            let cancel = {
                                let on_update = on_update.clone();
                                let appointment = appointment.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_update.emit((appointment.clone(), AppointmentStatus::Cancelled));
                                })
                            };
                            let finish = {
                                let on_update = on_update.clone();
                                let appointment = appointment.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_update.emit((appointment.clone(), AppointmentStatus::Finished));
                                })
                            };
                            html! {
                                <tr class="border-t border-gray-200">
                                    <td class="px-3 py-2">{ &appointment.dentist_name }</td>
                                    <td class="px-3 py-2">{ format_date(&appointment.appointment_date) }</td>
                                    <td class="px-3 py-2">{ appointment.status.to_string() }</td>
                                    <td class="px-3 py-2 space-x-2">
                                        <button
                                            class="px-2 py-1 text-xs border border-red-500 text-red-600 rounded hover:bg-red-50"
                                            onclick={cancel}
                                        >
                                            { "Cancel" }
                                        </button>
                                        <button
                                            class="px-2 py-1 text-xs border border-green-600 text-green-700 rounded hover:bg-green-50"
                                            onclick={finish}
                                        >
                                            { "Finish" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-r from-blue-50 to-blue-200 p-4">
            <div class="max-w-3xl mx-auto bg-white/70 p-6 rounded-lg shadow border border-gray-300">
                <div class="flex items-center justify-between mb-4">
                    <h1 class="text-2xl font-bold text-gray-800">{ "Your Appointments" }</h1>
                    <div class="flex items-center space-x-3">
                        {
                            if !user_email.is_empty() {
                                html! {
                                    <span class="text-sm text-gray-500">
                                        { format!("Logged in as: {}", *user_email) }
                                    </span>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <button
                            class="px-3 py-1 text-sm border border-red-500 text-red-600 rounded hover:bg-red-50"
                            onclick={on_logout}
                        >
                            { "Logout" }
                        </button>
                    </div>
                </div>

                { list }

                <div class="flex justify-center mt-6">
                    <button
                        class="px-8 py-2 rounded-full bg-blue-600 text-white font-semibold hover:bg-blue-700"
                        onclick={go_book}
                    >
                        { "Book New Appointment" }
                    </button>
                </div>

                <CalendarView />
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::providers::api::testing::StubClient;

    #[test]
    fn format_date_renders_month_day_year() {
        assert_eq!(format_date("2026-09-01"), "09/01/2026");
        assert_eq!(format_date("2026-09-01T08:00:00Z"), "09/01/2026");
    }

    #[test]
    fn format_date_passes_through_unparseable_input() {
        assert_eq!(format_date("soon"), "soon");
    }

    fn appointments_body() -> serde_json::Value {
        json!({
            "data": [{
                "reference_id": "ref-1",
                "dentist_name": "Dr. Molar",
                "appointment_date": "2026-09-01",
                "status": "scheduled"
            }]
        })
    }

    fn update_request() -> UpdateAppointmentRequest {
        UpdateAppointmentRequest {
            reference_id: "ref-1".to_string(),
            dentist_name: "Dr. Molar".to_string(),
            appointment_date: "2026-09-01".to_string(),
            status: AppointmentStatus::Cancelled,
        }
    }

    #[test]
    fn fetch_maps_a_missing_list_to_empty() {
        let api = Api::with_client(StubClient::default().reject(
            "/user-appointments",
            404,
            "No appointments found",
        ));
        let list = block_on(fetch_appointments(&api, "a@b.com"));
        assert_eq!(list, Ok(Vec::new()));
    }

    #[test]
    fn fetch_surfaces_server_failures() {
        let api =
            Api::with_client(StubClient::default().reject("/user-appointments", 500, "boom"));
        let list = block_on(fetch_appointments(&api, "a@b.com"));
        assert_eq!(list, Err("Failed to load appointments.".to_string()));
    }

    #[test]
    fn successful_update_refreshes_the_list_once() {
        let api = Api::with_client(
            StubClient::default()
                .respond("/appointments/update", json!({"message": "updated"}))
                .respond("/user-appointments", appointments_body()),
        );
        let (update_error, list) = block_on(update_and_refresh(&api, &update_request(), "a@b.com"));
        assert_eq!(update_error, None);
        assert_eq!(list.unwrap().len(), 1);
        assert_eq!(api.client().calls_to("/appointments/update"), 1);
        assert_eq!(api.client().calls_to("/user-appointments"), 1);
    }

    #[test]
    fn failed_update_still_refreshes_the_list_once() {
        let api = Api::with_client(
            StubClient::default()
                .reject("/appointments/update", 500, "update failed")
                .respond("/user-appointments", appointments_body()),
        );
        let (update_error, list) = block_on(update_and_refresh(&api, &update_request(), "a@b.com"));
        assert_eq!(update_error, Some("update failed".to_string()));
        assert!(list.is_ok());
        assert_eq!(api.client().calls_to("/user-appointments"), 1);
    }
}
