//! Opaque route handlers
//!
//! The registry never calls a handler. It stores one per route, hands it
//! back on lookup and compares handlers by identity.

use std::fmt;
use std::sync::Arc;

/// Handler function type
pub type HandlerFn<Req, Res> = dyn Fn(Req) -> Res + Send + Sync;

/// Named, reference-counted handler.
///
/// Cloning shares the underlying function, so clones are `ptr_eq` to
/// the handler they were cloned from.
pub struct Handler<Req, Res> {
    name: String,
    func: Arc<HandlerFn<Req, Res>>,
}

impl<Req, Res> Handler<Req, Res> {
    /// Create a handler with an explicit display name
    pub fn new(name: impl Into<String>, func: impl Fn(Req) -> Res + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a handler named after the function's type.
    ///
    /// Function items get their own name (`list_users`), closures show up
    /// as `{{closure}}`.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(Req) -> Res + Send + Sync + 'static,
    {
        Self::new(short_type_name::<F>(), func)
    }

    /// Display identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the handler
    pub fn call(&self, req: Req) -> Res {
        (self.func)(req)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

fn short_type_name<F>() -> String {
    let full = std::any::type_name::<F>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path).to_string()
}

impl<Req, Res> Clone for Handler<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<Req, Res> fmt::Debug for Handler<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<Req, Res> fmt::Display for Handler<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
