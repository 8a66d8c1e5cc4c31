//! Todo Row Component
//!
//! Clicking the label toggles completion; the button deletes.

use leptos::prelude::*;
use todo_core::Todo;

use crate::context::use_todo_context;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();

    let id = todo.id;
    let is_complete = todo.is_complete;

    view! {
        <div class=if is_complete { "todo completed" } else { "todo" }>
            <span class="task" on:click=move |_| ctx.toggle(id, is_complete)>
                {todo.task}
            </span>
            <button class="delete-btn" on:click=move |_| ctx.remove(id)>
                "Delete"
            </button>
        </div>
    }
}
