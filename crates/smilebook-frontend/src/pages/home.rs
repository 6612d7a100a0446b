use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().unwrap();

    let go_register = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Register))
    };
    let go_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Login))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-50 to-blue-200 p-4">
            <div class="max-w-2xl text-center">
                <h1 class="text-5xl font-bold text-blue-900 mb-4">
                    { "Book Your Dental Appointment" }
                </h1>
                <p class="text-lg text-gray-600 mb-12 max-w-xl mx-auto">
                    { "Simple, secure, and available 24/7 — because your dental deserves top-tier care." }
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        class="px-10 py-3 rounded-full bg-blue-600 text-white hover:bg-blue-700"
                        onclick={go_register}
                    >
                        { "Sign up" }
                    </button>
                    <button
                        class="px-10 py-3 rounded-full border border-blue-600 text-blue-600 hover:bg-blue-50"
                        onclick={go_login}
                    >
                        { "Login" }
                    </button>
                </div>
            </div>
        </div>
    }
}
