//! Browser-side session state: the persisted bearer token and the route
//! guard that gates protected views on it.
//!
//! The token lives under a single LocalStorage key. It is written on login,
//! read by protected views, and deleted on logout or when the guard finds it
//! expired or undecodable. Nothing else mutates it.

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use smilebook::auth::{self, Claims, SessionDecision};
use smilebook::log;

use crate::routes::Route;

const TOKEN_KEY: &str = "authToken";

pub fn load_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    LocalStorage::set(TOKEN_KEY, token).ok();
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Wall-clock time as seconds since the Unix epoch.
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

/// Claims from the stored token, if one is present and decodable.
pub fn current_claims() -> Option<Claims> {
    let token = load_token()?;
    match auth::decode_claims(&token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::warn!("stored token is not decodable: {err}");
            None
        }
    }
}

/// Evaluate the stored session, clearing the token when it is rejected.
pub fn gate(now_secs: u64) -> SessionDecision {
    let decision = auth::evaluate(load_token().as_deref(), now_secs);
    if decision.clears_token() {
        log::warn!("stored token rejected ({decision:?}), clearing session");
        clear_token();
    }
    decision
}

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub children: Children,
}

/// Route guard: renders its children only for an active session, otherwise
/// redirects to the login page. The decision is made before the protected
/// content ever renders.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    match gate(now_secs()) {
        SessionDecision::Active(_) => html! { <>{ props.children.clone() }</> },
        SessionDecision::Missing | SessionDecision::Invalid | SessionDecision::Expired(_) => {
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[wasm_bindgen_test]
    fn expired_token_is_cleared_by_the_gate() {
        store_token(&token_with_payload(r#"{"exp":1000}"#));
        assert!(matches!(gate(2000), SessionDecision::Expired(_)));
        assert_eq!(load_token(), None);
    }

    #[wasm_bindgen_test]
    fn malformed_token_is_cleared_by_the_gate() {
        store_token("garbage");
        assert_eq!(gate(2000), SessionDecision::Invalid);
        assert_eq!(load_token(), None);
    }

    #[wasm_bindgen_test]
    fn missing_token_leaves_storage_untouched() {
        clear_token();
        assert_eq!(gate(2000), SessionDecision::Missing);
        assert_eq!(load_token(), None);
    }

    #[wasm_bindgen_test]
    fn live_token_survives_the_gate() {
        let token = token_with_payload(r#"{"email":"a@b.com","exp":3000}"#);
        store_token(&token);
        assert!(matches!(gate(2000), SessionDecision::Active(_)));
        assert_eq!(load_token(), Some(token));
        clear_token();
    }
}
