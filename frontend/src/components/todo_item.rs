use chrono::{DateTime, Utc};
use yew::prelude::*;

use shared::models::Todo;

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let todo = &props.todo;
    let completed = todo.completed();

    let checkbox_class = classes!("todo-checkbox", completed.then_some("checked"));
    let title_class = classes!("todo-title", completed.then_some("completed"));

    html! {
        <li class="todo-item">
            <span class={checkbox_class}>
                if completed {
                    { "\u{2713}" }
                }
            </span>
            <div class="todo-content">
                <span class={title_class}>
                    { todo.task.clone().unwrap_or_default() }
                </span>
            </div>
            <span class="todo-date">{ format_date(&todo.inserted_at) }</span>
        </li>
    }
}

/// Short locale-style date, e.g. `03/01/24`.
fn format_date(inserted_at: &DateTime<Utc>) -> String {
    inserted_at.format("%x").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_renders_as_short_form() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "03/01/24");
    }
}
