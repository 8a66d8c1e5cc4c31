//! Application Context
//!
//! Shared controller handle provided via Leptos Context API.
//! Every action locks the controller, runs one remote operation, then
//! copies the reconciled state into the store.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::lock::Mutex;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Outcome, PostgrestClient, TodoId, TodoListController};

use crate::alert::AlertNotifier;
use crate::store::{store_sync, AppStateStoreFields, AppStore};

pub type Controller = TodoListController<PostgrestClient, AlertNotifier>;

/// Actions available to components
#[derive(Clone, Copy)]
pub struct TodoContext {
    controller: StoredValue<Rc<Mutex<Controller>>, LocalStorage>,
    store: AppStore,
}

impl TodoContext {
    pub fn new(client: PostgrestClient, store: AppStore) -> Self {
        let controller = TodoListController::new(client, AlertNotifier);
        Self {
            controller: StoredValue::new_local(Rc::new(Mutex::new(controller))),
            store,
        }
    }

    /// Run one controller operation on the local executor, then sync the store
    fn run<F>(&self, operation: F, after: impl FnOnce(Outcome) + 'static)
    where
        F: FnOnce(&mut Controller) -> LocalBoxFuture<'_, Outcome> + 'static,
    {
        let controller = self.controller.get_value();
        let store = self.store;
        spawn_local(async move {
            let mut controller = controller.lock().await;
            let outcome = operation(&mut *controller).await;
            store_sync(&store, controller.state());
            after(outcome);
        });
    }

    /// Fetch all todos
    pub fn load(&self) {
        *self.store.is_loading().write() = true;
        self.run(|c| c.load().boxed_local(), |_| {});
    }

    /// Keep the input text in the store
    pub fn set_draft(&self, text: String) {
        *self.store.draft().write() = text;
    }

    /// Add the current input text as a new todo
    pub fn submit(&self) {
        let text = self.store.draft().get_untracked();
        let store = self.store;
        self.run(
            move |c| {
                c.set_draft(text);
                c.submit().boxed_local()
            },
            move |outcome| {
                if outcome == Outcome::Applied {
                    store.draft().write().clear();
                }
            },
        );
    }

    /// Flip completion of a todo, given its current value
    pub fn toggle(&self, id: TodoId, is_complete: bool) {
        self.run(move |c| c.toggle(id, is_complete).boxed_local(), |_| {});
    }

    /// Delete a todo
    pub fn remove(&self, id: TodoId) {
        self.run(move |c| c.remove(id).boxed_local(), |_| {});
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
