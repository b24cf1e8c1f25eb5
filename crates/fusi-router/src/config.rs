//! Router configuration

use crate::policy::{
    ExactMatcher, FnMatcher, PatternMatcher, PrepareHandler, RouteValidator, ValidatorChain,
};
use crate::{CacheConfig, Handler, Route};

/// Router configuration
///
/// Built through its setters only; the router reads it once at
/// construction.
///
/// ```
/// use fusi_router::{RouterConfig, Router};
///
/// let router: Router<(), &str> = Router::with_config(
///     RouterConfig::new().name("rest_api").prefix("/v1"),
/// ).unwrap();
/// assert_eq!(router.name(), Some("rest_api"));
/// assert_eq!(router.prefix(), Some("/v1"));
/// ```
pub struct RouterConfig<Req, Res> {
    /// Prepended to route names as `name.route`
    pub(crate) name: Option<String>,
    /// Prepended to route patterns, must start with `/`
    pub(crate) prefix: Option<String>,
    pub(crate) matcher: Box<dyn PatternMatcher<Req, Res>>,
    pub(crate) validators: ValidatorChain,
    pub(crate) prepare: Option<PrepareHandler<Req, Res>>,
    /// Pattern cache, `None` disables it
    pub(crate) cache: Option<CacheConfig>,
}

impl<Req, Res> Default for RouterConfig<Req, Res> {
    fn default() -> Self {
        Self {
            name: None,
            prefix: None,
            matcher: Box::new(ExactMatcher),
            validators: ValidatorChain::default(),
            prepare: None,
            cache: Some(CacheConfig::default()),
        }
    }
}

impl<Req, Res> RouterConfig<Req, Res> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Replace the pattern matcher
    pub fn matcher<M: PatternMatcher<Req, Res> + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Replace the pattern matcher with a closure
    pub fn match_with<F>(self, f: F) -> Self
    where
        F: Fn(&str, &Route<Req, Res>) -> bool + Send + Sync + 'static,
    {
        self.matcher(FnMatcher::new(f))
    }

    /// Append a validator to the chain
    pub fn validator<V: RouteValidator + 'static>(mut self, validator: V) -> Self {
        self.validators.add(validator);
        self
    }

    /// Drop all validators, including the default leading-slash rule
    pub fn clear_validators(mut self) -> Self {
        self.validators.clear();
        self
    }

    /// Wrap handlers before they are stored
    pub fn prepare_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(Handler<Req, Res>) -> Handler<Req, Res> + Send + Sync + 'static,
    {
        self.prepare = Some(Box::new(f));
        self
    }

    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache = Some(config);
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.cache = None;
        self
    }
}
