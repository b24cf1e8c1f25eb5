//! Route registry
//!
//! Routes are registered once, in order, and never removed. Lookups go
//! either by qualified name (a map hit) or by pattern (a scan in
//! registration order through the configured matcher, memoized by the
//! pattern cache).

use crate::cache::{CacheStats, PatternCache};
use crate::policy::{PatternMatcher, PrepareHandler, ValidatorChain};
use crate::{ConfigurationError, Handler, Methods, Result, Route, RouterConfig};
use std::collections::HashMap;

/// Append-only registry of routes.
///
/// Registration needs `&mut self` and lookups only `&self`, so once
/// populated a router can be shared (e.g. behind an `Arc`) by request
/// handlers without further locking.
pub struct Router<Req, Res> {
    name: Option<String>,
    prefix: Option<String>,
    /// Registration order
    routes: Vec<Route<Req, Res>>,
    /// Qualified name -> position in `routes`
    index: HashMap<String, usize>,
    matcher: Box<dyn PatternMatcher<Req, Res>>,
    validators: ValidatorChain,
    prepare: Option<PrepareHandler<Req, Res>>,
    cache: Option<PatternCache>,
}

impl<Req, Res> Router<Req, Res> {
    /// Unnamed, unprefixed router with the default strategies
    pub fn new() -> Self {
        Self::build(RouterConfig::default())
    }

    /// Build a router from `config`.
    ///
    /// Fails when the prefix is non-empty and lacks a leading slash. An
    /// empty name or prefix counts as absent.
    pub fn with_config(config: RouterConfig<Req, Res>) -> Result<Self> {
        if let Some(prefix) = config.prefix.as_deref() {
            if !prefix.is_empty() && !prefix.starts_with('/') {
                return Err(ConfigurationError::InvalidPrefix(prefix.to_string()));
            }
        }
        Ok(Self::build(config))
    }

    fn build(config: RouterConfig<Req, Res>) -> Self {
        let name = config.name.filter(|n| !n.is_empty());
        let prefix = config.prefix.filter(|p| !p.is_empty());
        tracing::debug!(name = ?name, prefix = ?prefix, "router created");

        Self {
            name,
            prefix,
            routes: Vec::new(),
            index: HashMap::new(),
            matcher: config.matcher,
            validators: config.validators,
            prepare: config.prepare,
            cache: config.cache.as_ref().map(PatternCache::new),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether a route with the same qualified name is registered
    pub fn contains(&self, route: &Route<Req, Res>) -> bool {
        self.contains_name(route.name())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Routes in registration order
    pub fn routes(&self) -> std::slice::Iter<'_, Route<Req, Res>> {
        self.routes.iter()
    }

    /// `(qualified name, route)` pairs in registration order
    pub fn items(&self) -> impl Iterator<Item = (&str, &Route<Req, Res>)> + '_ {
        self.routes.iter().map(|route| (route.name(), route))
    }

    /// Register a route.
    ///
    /// The name and pattern are qualified with the router's name and
    /// prefix. Returns the stored route. On error the registry is left
    /// untouched.
    ///
    /// # Errors
    /// - empty `name` or `pattern`, or a malformed method token
    /// - the qualified name is already registered (checked before any
    ///   validator or the handler hook runs)
    /// - a validator rejects the qualified name or pattern
    pub fn add_route<I, S>(
        &mut self,
        name: &str,
        pattern: &str,
        handler: Handler<Req, Res>,
        methods: I,
    ) -> Result<&Route<Req, Res>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let route = match self.prepare_route(name, pattern, handler, methods) {
            Ok(route) => route,
            Err(e) => {
                tracing::debug!(name, pattern, error = %e, "route rejected");
                return Err(e);
            }
        };

        let slot = self.routes.len();
        self.index.insert(route.name().to_string(), slot);
        self.routes.push(route);
        self.invalidate_cache();

        let route = &self.routes[slot];
        tracing::debug!(
            name = route.name(),
            pattern = route.pattern(),
            handler = route.handler().name(),
            methods = %route.methods(),
            "route registered"
        );
        Ok(route)
    }

    fn prepare_route<I, S>(
        &self,
        name: &str,
        pattern: &str,
        handler: Handler<Req, Res>,
        methods: I,
    ) -> Result<Route<Req, Res>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.is_empty() {
            return Err(ConfigurationError::empty("name"));
        }
        if pattern.is_empty() {
            return Err(ConfigurationError::empty("pattern"));
        }
        let methods = Methods::from_tokens(methods)?;

        let route_name = self.qualify_name(name);
        if self.index.contains_key(&route_name) {
            return Err(ConfigurationError::DuplicateName(route_name));
        }
        let route_pattern = self.qualify_pattern(pattern);

        self.validators.check_name(&route_name)?;
        self.validators.check_pattern(&route_pattern)?;
        let handler = match &self.prepare {
            Some(prepare) => prepare(handler),
            None => handler,
        };

        Ok(Route::new(route_name, route_pattern, handler, methods))
    }

    fn qualify_name(&self, name: &str) -> String {
        match &self.name {
            Some(router_name) => format!("{router_name}.{name}"),
            None => name.to_string(),
        }
    }

    fn qualify_pattern(&self, pattern: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{pattern}"),
            None => pattern.to_string(),
        }
    }

    /// Look a route up by qualified name.
    ///
    /// When `name` is missing and `fallback` is given, `fallback` is tried
    /// once as a name. The fallback gets no fallback of its own; chain
    /// calls to go deeper.
    pub fn match_name(&self, name: &str, fallback: Option<&str>) -> Option<&Route<Req, Res>> {
        self.slot_by_name(name, fallback).map(|slot| &self.routes[slot])
    }

    /// Look a route up by pattern.
    ///
    /// Routes are tried in registration order with the configured matcher;
    /// the first match wins. With no match, `fallback` is resolved as in
    /// [`match_name`](Self::match_name).
    pub fn match_pattern(&self, pattern: &str, fallback: Option<&str>) -> Option<&Route<Req, Res>> {
        let fallback = fallback.filter(|f| !f.is_empty());

        let slot = match &self.cache {
            Some(cache) => match cache.get(pattern, fallback) {
                Some(slot) => slot,
                None => {
                    let slot = self.scan(pattern, fallback);
                    cache.set(pattern, fallback, slot);
                    slot
                }
            },
            None => self.scan(pattern, fallback),
        };

        slot.map(|slot| &self.routes[slot])
    }

    fn scan(&self, pattern: &str, fallback: Option<&str>) -> Option<usize> {
        self.routes
            .iter()
            .position(|route| self.matcher.is_match(pattern, route))
            .or_else(|| fallback.and_then(|f| self.slot_by_name(f, None)))
    }

    fn slot_by_name(&self, name: &str, fallback: Option<&str>) -> Option<usize> {
        match self.index.get(name) {
            Some(&slot) => Some(slot),
            None => match fallback {
                Some(fallback) if !fallback.is_empty() => self.slot_by_name(fallback, None),
                _ => None,
            },
        }
    }

    /// Pattern cache counters, `None` when caching is disabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(PatternCache::stats)
    }

    /// Drop every memoized pattern lookup.
    ///
    /// `add_route` already does this after each registration.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

impl<Req, Res> Default for Router<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Req, Res> IntoIterator for &'a Router<Req, Res> {
    type Item = &'a Route<Req, Res>;
    type IntoIter = std::slice::Iter<'a, Route<Req, Res>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl<Req, Res> std::fmt::Debug for Router<Req, Res> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
