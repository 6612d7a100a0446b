use web_sys::HtmlInputElement;
use yew::prelude::*;

use smilebook::{async_callback, data::RegisterRequest};

use crate::components::{TextField, Toast, ToastMessage};
use crate::providers::api;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_memo((), |_| api::create());

    // Form state
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let phone_number = use_state(String::new);

    // UI state
    let processing = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_submit = async_callback!([
        api,
        first_name,
        last_name,
        email,
        password,
        phone_number,
        processing,
        toast,
    ] |e: SubmitEvent| {
        e.prevent_default();

        if first_name.is_empty()
            || last_name.is_empty()
            || email.is_empty()
            || password.is_empty()
            || phone_number.is_empty()
        {
            toast.set(Some(ToastMessage::error("All fields are required.")));
            return;
        }
        if *processing {
            return;
        }

        processing.set(true);

        let request = RegisterRequest {
            first_name: (*first_name).clone(),
            last_name: (*last_name).clone(),
            email: (*email).clone(),
            password: (*password).clone(),
            phone_number: (*phone_number).clone(),
        };

        match api.register(&request).await {
            Ok(response) => {
                processing.set(false);
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration successful!".to_string());
                toast.set(Some(ToastMessage::success(message)));

                // Reset the form
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                password.set(String::new());
                phone_number.set(String::new());
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
                <h1 class="text-2xl font-bold text-center text-gray-800 mb-6">{ "Create an Account" }</h1>

                <form onsubmit={on_submit}>
                    <TextField
                        label="First Name"
                        value={(*first_name).clone()}
                        oninput={bind(&first_name)}
                        required=true
                    />
                    <TextField
                        label="Last Name"
                        value={(*last_name).clone()}
                        oninput={bind(&last_name)}
                        required=true
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value={(*email).clone()}
                        oninput={bind(&email)}
                        required=true
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                        required=true
                    />
                    <TextField
                        label="Phone Number"
                        value={(*phone_number).clone()}
                        oninput={bind(&phone_number)}
                        required=true
                    />

                    <button
                        type="submit"
                        class="w-full mt-2 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled={*processing}
                    >
                        { if *processing { "Registering..." } else { "Register" } }
                    </button>
                </form>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
