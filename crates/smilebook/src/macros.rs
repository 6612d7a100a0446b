#[macro_export]
/// Define an async callback for use in Yew components.
///
/// The macro clones the listed handles and spawns the body as a local async
/// task, avoiding the manual clone-before-move boilerplate that every async
/// event handler otherwise needs.
///
/// Two forms are supported, without and with an event parameter:
/// ```compile_fail
/// let refresh = async_callback!([api, items, loading] {
///     loading.set(true);
///     match api.user_appointments(&email).await {
///         Ok(response) => items.set(response.data),
///         Err(err) => log::error!("fetch failed: {err}"),
///     }
///     loading.set(false);
/// });
/// ```
/// ```compile_fail
/// let on_submit = async_callback!([api, toast] |e: SubmitEvent| {
///     e.prevent_default();
///     // ...
/// });
/// ```
macro_rules! async_callback {
    // Version with a typed event parameter. The event arms must precede the
    // plain-body arm: a closure is itself an `expr` and would match it.
    ([$($var:ident),* $(,)?] |$event:ident: $event_ty:ty| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event: $event_ty| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version with an untyped event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
