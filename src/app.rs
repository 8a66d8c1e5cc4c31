//! Todo List Frontend App
//!
//! Resolves the backend configuration, wires the controller into context
//! and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{PostgrestClient, SupabaseConfig};

use crate::components::{NewTodoForm, TodoList};
use crate::context::TodoContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    match SupabaseConfig::from_build_env() {
        Ok(config) => view! { <TodoApp config=config /> }.into_any(),
        Err(err) => {
            log::error!("[app] backend not configured: {}", err);
            view! {
                <div class="container">
                    <h1>"My Todo App"</h1>
                    <p class="config-error">{err.to_string()}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn TodoApp(config: SupabaseConfig) -> impl IntoView {
    let client = PostgrestClient::new(config);
    log::info!("[app] using table {} at {}", client.config().table, client.config().url);

    let store = Store::new(AppState::new());
    let ctx = TodoContext::new(client, store);
    provide_context(store);
    provide_context(ctx);

    // Load once on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="container">
            <h1>"My Todo App"</h1>
            <p>"Built with Vercel + Supabase"</p>

            <NewTodoForm />

            <TodoList />

            <p class="todo-count">
                {move || {
                    let total = store.todos().with(|todos| todos.len());
                    format!("{} of {} remaining", store.remaining().get(), total)
                }}
            </p>

            <footer>
                <p>
                    "Powered by "
                    <a href="https://vercel.com" target="_blank" rel="noopener noreferrer">"Vercel"</a>
                    " + "
                    <a href="https://supabase.com" target="_blank" rel="noopener noreferrer">"Supabase"</a>
                </p>
            </footer>
        </div>
    }
}
