use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{BookingPage, DashboardPage, HomePage, LoginPage, RegisterPage};
use crate::session::Protected;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Book,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Book => html! { <BookingPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <Protected><DashboardPage /></Protected> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
