use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{not_found::NotFound, todos::Todos};
use crate::services::session::Session;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Todos,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route, session: Option<Session>) -> Html {
    match route {
        Route::Todos => html! { <Todos {session} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
