use yew::prelude::*;

use shared::models::Todo;

use crate::components::todo_item::TodoItem;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub todos: Vec<Todo>,
}

#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    if props.todos.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{ "No todos found." }</p>
            </div>
        };
    }

    html! {
        <ul class="todo-list">
            { for props.todos.iter().map(|todo| html! {
                <TodoItem key={todo.id} todo={todo.clone()} />
            }) }
        </ul>
    }
}
