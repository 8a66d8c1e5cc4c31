//! Todo List Component
//!
//! Loading indicator, empty state, or the rows.

use leptos::prelude::*;

use super::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.is_loading().get()
            fallback=|| view! { <p>"Loading todos..."</p> }
        >
            <div class="todos">
                <Show
                    when=move || store.todos().with(|todos| !todos.is_empty())
                    fallback=|| view! { <p class="empty">"No todos yet. Add one above!"</p> }
                >
                    // Keyed on completion too so a toggled row re-renders
                    <For
                        each=move || store.todos().get()
                        key=|todo| (todo.id, todo.is_complete)
                        children=move |todo| view! { <TodoRow todo=todo /> }
                    />
                </Show>
            </div>
        </Show>
    }
}
