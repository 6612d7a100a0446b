mod components;
mod pages;
mod providers;
mod routes;
mod session;

use yew::prelude::*;
use yew_router::prelude::*;

use providers::AppointmentsProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppointmentsProvider>
                <Switch<Route> render={switch} />
            </AppointmentsProvider>
        </BrowserRouter>
    }
}

fn main() {
    smilebook::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
