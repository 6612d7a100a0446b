use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use smilebook::api::ApiClient;
use smilebook::{async_callback, data::LoginRequest};

use crate::components::{TextField, Toast, ToastMessage};
use crate::providers::api::{self, Api};
use crate::routes::Route;
use crate::session;

/// How long the success toast is shown before navigating to the dashboard.
const REDIRECT_DELAY_MS: u32 = 500;

/// Shallow email-shape check; anything deeper is the API's problem.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exchange credentials for a session token and persist it. A 2xx response
/// without a token is still a failure, and failure of any kind leaves the
/// stored token untouched.
async fn perform_login<C: ApiClient>(api: &Api<C>, request: &LoginRequest) -> Result<(), String> {
    match api.login(request).await {
        Ok(response) => match response.token {
            Some(token) => {
                session::store_token(&token);
                Ok(())
            }
            None => Err("Token not found. Please try again.".to_string()),
        },
        Err(err) => Err(err.to_string()),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator().unwrap();

    // Form state
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<String>);
    let password_error = use_state(|| None::<String>);

    // UI state
    let processing = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    let on_email_input = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                email_error.set(None);
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        let password_error = password_error.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                password_error.set(None);
            }
        })
    };

    let on_submit = async_callback!([
        api,
        navigator,
        email,
        password,
        email_error,
        password_error,
        processing,
        toast,
    ] |e: SubmitEvent| {
        e.prevent_default();

        let mut valid = true;
        if email.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            valid = false;
        } else if !is_valid_email(&email) {
            email_error.set(Some("Enter a valid email".to_string()));
            valid = false;
        }
        if password.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            valid = false;
        }
        if !valid || *processing {
            return;
        }

        processing.set(true);

        let request = LoginRequest {
            email: (*email).clone(),
            password: (*password).clone(),
        };

        match perform_login(&api, &request).await {
            Ok(()) => {
                processing.set(false);
                toast.set(Some(ToastMessage::success("Login successful! Redirecting...")));
                email.set(String::new());
                password.set(String::new());

                let navigator = navigator.clone();
                Timeout::new(REDIRECT_DELAY_MS, move || {
                    navigator.push(&Route::Dashboard);
                })
                .forget();
            }
            Err(message) => {
                processing.set(false);
                toast.set(Some(ToastMessage::error(message)));
            }
        }
    });

    let go_register = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Register))
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-50 to-blue-200 p-4">
            <div class="w-full max-w-md bg-white/70 p-6 rounded-lg shadow border border-gray-300">
                <h1 class="text-2xl font-bold text-center text-gray-800 mb-6">{ "Sign In" }</h1>

                <form onsubmit={on_submit}>
                    <TextField
                        label="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        error={(*email_error).clone()}
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        error={(*password_error).clone()}
                    />

                    <div class="flex gap-3 mt-2">
                        <button
                            type="submit"
                            class="flex-1 px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                            disabled={*processing}
                        >
                            { if *processing { "Logging in..." } else { "Log In" } }
                        </button>
                        <button
                            type="button"
                            class="flex-1 px-4 py-2 border border-blue-600 text-blue-600 rounded hover:bg-blue-50"
                            onclick={go_register}
                        >
                            { "Sign up" }
                        </button>
                    </div>
                </form>
            </div>

            <Toast toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::providers::api::testing::StubClient;

    wasm_bindgen_test_configure!(run_in_browser);

    fn request() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".into(),
            password: "hunter2".into(),
        }
    }

    #[wasm_bindgen_test]
    async fn successful_login_stores_the_token() {
        session::clear_token();
        let api = Api::with_client(
            StubClient::default().respond("/login", serde_json::json!({"token": "tok-1"})),
        );
        assert_eq!(perform_login(&api, &request()).await, Ok(()));
        assert_eq!(session::load_token(), Some("tok-1".to_string()));
        session::clear_token();
    }

    #[wasm_bindgen_test]
    async fn rejected_login_leaves_storage_untouched() {
        session::clear_token();
        let api =
            Api::with_client(StubClient::default().reject("/login", 401, "Invalid password"));
        assert_eq!(
            perform_login(&api, &request()).await,
            Err("Invalid password".to_string())
        );
        assert_eq!(session::load_token(), None);
    }

    #[wasm_bindgen_test]
    async fn token_less_success_is_still_a_failure() {
        session::clear_token();
        let api = Api::with_client(StubClient::default().respond("/login", serde_json::json!({})));
        assert!(perform_login(&api, &request()).await.is_err());
        assert_eq!(session::load_token(), None);
    }
}
