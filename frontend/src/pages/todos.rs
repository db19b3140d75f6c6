use yew::prelude::*;

use shared::models::Todo;

use crate::components::todo_list::TodoList;
use crate::services::api::{ApiError, ApiService};
use crate::services::session::Session;

/// Fetch lifecycle once a session exists. The no-session case is handled
/// before any request goes out.
#[derive(Debug, Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded(Vec<Todo>),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct TodosProps {
    pub session: Option<Session>,
}

#[function_component(Todos)]
pub fn todos(props: &TodosProps) -> Html {
    let state = use_state(|| FetchState::Loading);
    let fetch_time = use_state(|| None::<f64>);

    {
        let state = state.clone();
        let fetch_time = fetch_time.clone();

        // One fetch per session change; logging out and back in re-runs it.
        use_effect_with(props.session.clone(), move |session| {
            if let Some(session) = session.clone() {
                state.set(FetchState::Loading);
                fetch_time.set(None);

                wasm_bindgen_futures::spawn_local(async move {
                    let started = now_ms();

                    let result = ApiService::list_todos(&session).await;

                    if let (Some(started), Some(finished)) = (started, now_ms()) {
                        fetch_time.set(Some(finished - started));
                    }

                    match result {
                        Ok(todos) => state.set(FetchState::Loaded(todos)),
                        Err(ApiError::Server(message)) => state.set(FetchState::Error(message)),
                        Err(ApiError::Network(detail)) => {
                            tracing::error!("Failed to fetch todos: {}", detail);
                            state.set(FetchState::Error("Failed to fetch todos".to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div class="container">
            <h2>{ "Todos from API" }</h2>

            if props.session.is_none() {
                <div class="banner banner-warning">
                    { "Please log in to view todos." }
                </div>
            } else {
                <>
                    if let Some(ms) = *fetch_time {
                        <div class="fetch-time">
                            <strong>{ "API route fetch time: " }</strong>
                            { format!("{:.2}ms", ms) }
                        </div>
                    }

                    { match &*state {
                        FetchState::Loading => html! {
                            <div class="loading">
                                <div class="spinner"></div>
                            </div>
                        },
                        FetchState::Error(message) => html! {
                            <div class="banner banner-error">{ message }</div>
                        },
                        FetchState::Loaded(todos) => html! {
                            <TodoList todos={todos.clone()} />
                        },
                    } }

                    <div class="page-note">
                        { "This page fetches todos from the /api/todos route and is read-only." }
                    </div>
                </>
            }
        </div>
    }
}

fn now_ms() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}
