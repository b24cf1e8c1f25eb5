//! Route record

use crate::{Handler, Methods};
use std::fmt;

/// An immutable binding of a qualified name and pattern to a handler.
///
/// Routes are only created by [`Router::add_route`](crate::Router::add_route),
/// which has already applied the router's name and prefix.
pub struct Route<Req, Res> {
    name: String,
    pattern: String,
    handler: Handler<Req, Res>,
    methods: Methods,
}

impl<Req, Res> Route<Req, Res> {
    pub(crate) fn new(
        name: String,
        pattern: String,
        handler: Handler<Req, Res>,
        methods: Methods,
    ) -> Self {
        Self {
            name,
            pattern,
            handler,
            methods,
        }
    }

    /// Qualified route name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler<Req, Res> {
        &self.handler
    }

    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    /// Whether `method` is listed for this route (case-insensitive)
    pub fn allows(&self, method: impl AsRef<str>) -> bool {
        self.methods.contains(method)
    }
}

impl<Req, Res> Clone for Route<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            pattern: self.pattern.clone(),
            handler: self.handler.clone(),
            methods: self.methods.clone(),
        }
    }
}

impl<Req, Res> fmt::Debug for Route<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("handler", &self.handler)
            .field("methods", &self.methods)
            .finish()
    }
}

impl<Req, Res> fmt::Display for Route<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route(name='{}', pattern='{}', handler='{}', methods={})",
            self.name, self.pattern, self.handler, self.methods
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    fn some_handler(_: ()) -> &'static str {
        "Test"
    }

    fn route(methods: &[&str]) -> Route<(), &'static str> {
        Route::new(
            "test".to_string(),
            "/test".to_string(),
            Handler::from_fn(some_handler),
            Methods::from_tokens(methods).unwrap(),
        )
    }

    #[test]
    fn test_route_attrs() {
        let route = route(&["get"]);
        assert_eq!(route.name(), "test");
        assert_eq!(route.pattern(), "/test");
        assert_eq!(route.methods(), &Methods::from_tokens(["GET"]).unwrap());
        assert_eq!(route.handler().call(()), "Test");
    }

    #[test]
    fn test_route_allows() {
        let route = route(&["get", "post"]);
        assert!(route.allows("GET"));
        assert!(route.allows(Method::Post));
        assert!(!route.allows(Method::Delete));
    }

    #[test]
    fn test_route_display() {
        let route = route(&["get"]);
        assert_eq!(
            route.to_string(),
            "Route(name='test', pattern='/test', handler='some_handler', methods=[GET])"
        );
    }
}
