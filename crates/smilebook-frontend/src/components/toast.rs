use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, dismissible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub severity: Severity,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        ToastMessage {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToastMessage {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

/// Toast notification, auto-hidden after four seconds or dismissed by hand.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.clone(), move |toast| {
            let timeout = toast
                .as_ref()
                .map(|_| Timeout::new(AUTO_HIDE_MS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let Some(toast) = &props.toast else {
        return html! {};
    };

    let colors = match toast.severity {
        Severity::Success => "bg-green-100 text-green-800 border-green-300",
        Severity::Error => "bg-red-100 text-red-800 border-red-300",
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={format!("fixed top-4 left-1/2 -translate-x-1/2 z-50 flex items-center space-x-3 px-4 py-3 border rounded shadow {colors}")}>
            <span>{ &toast.message }</span>
            <button class="font-bold cursor-pointer" onclick={on_close}>{ "✕" }</button>
        </div>
    }
}
