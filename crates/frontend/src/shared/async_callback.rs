//! Callbacks that return a future the caller awaits
//!
//! Layouts run these for refresh, submit and action handlers and keep a
//! busy flag raised until the future settles.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

type LocalFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;
type Handler<A> = Rc<dyn Fn(A) -> LocalFuture>;

/// Copyable handle to an async handler, like `Callback` for futures
pub struct AsyncCallback<A: 'static = ()> {
    inner: StoredValue<Handler<A>, LocalStorage>,
}

impl<A: 'static> Clone for AsyncCallback<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for AsyncCallback<A> {}

impl<A: 'static> AsyncCallback<A> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let handler: Handler<A> = Rc::new(move |arg| Box::pin(f(arg)) as LocalFuture);
        Self {
            inner: StoredValue::new_local(handler),
        }
    }

    pub async fn call(&self, arg: A) -> Result<(), String> {
        let Some(handler) = self.inner.try_get_value() else {
            return Err("handler is no longer mounted".to_string());
        };
        handler(arg).await
    }

    /// Run the handler with `busy` raised. A second run while busy is ignored.
    pub fn run_busy<R>(self, arg: A, busy: RwSignal<bool>, on_result: R)
    where
        R: FnOnce(Result<(), String>) + 'static,
    {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let result = self.call(arg).await;
            busy.try_set(false);
            if let Err(e) = &result {
                log::error!("async handler failed: {}", e);
            }
            on_result(result);
        });
    }
}
