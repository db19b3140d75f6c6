mod components;
mod pages;
mod services;
mod router;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};
use crate::services::session::load_session;

#[function_component(App)]
fn app() -> Html {
    // The session provider is a black box: whatever access token the login
    // flow left behind is picked up here and handed down as a prop.
    let session = use_state(load_session);

    let render = {
        let session = (*session).clone();
        move |route: Route| switch(route, session.clone())
    };

    html! {
        <BrowserRouter>
            <div id="app">
                <components::header::Header />
                <yew_router::Switch<Route> render={render} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
