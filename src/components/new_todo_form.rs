//! New Todo Form Component
//!
//! Text input plus "Add Todo" button; Enter in the input also submits.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_app_store();

    view! {
        <div class="add-todo">
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || store.draft().get()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        ctx.submit();
                    }
                }
            />
            <button on:click=move |_| ctx.submit()>"Add Todo"</button>
        </div>
    }
}
