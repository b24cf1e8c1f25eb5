//! Pluggable routing strategies
//!
//! A router is composed with a [`PatternMatcher`], an ordered
//! [`ValidatorChain`] and an optional handler-preparation hook. The
//! defaults give exact-string matching and the leading-slash rule.

use crate::{ConfigurationError, Handler, Result, Route};

/// Decides whether a candidate path selects a route.
///
/// Consulted once per route in registration order; the first `true` wins.
/// Implementations must be deterministic when the pattern cache is on.
pub trait PatternMatcher<Req, Res>: Send + Sync {
    fn is_match(&self, candidate: &str, route: &Route<Req, Res>) -> bool;
}

/// Exact string equality against the qualified pattern
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl<Req, Res> PatternMatcher<Req, Res> for ExactMatcher {
    #[inline]
    fn is_match(&self, candidate: &str, route: &Route<Req, Res>) -> bool {
        candidate == route.pattern()
    }
}

/// Matcher backed by a closure
pub struct FnMatcher<F>(F);

impl<F> FnMatcher<F> {
    pub fn new<Req, Res>(f: F) -> Self
    where
        F: Fn(&str, &Route<Req, Res>) -> bool + Send + Sync,
    {
        Self(f)
    }
}

impl<Req, Res, F> PatternMatcher<Req, Res> for FnMatcher<F>
where
    F: Fn(&str, &Route<Req, Res>) -> bool + Send + Sync,
{
    fn is_match(&self, candidate: &str, route: &Route<Req, Res>) -> bool {
        (self.0)(candidate, route)
    }
}

/// Registration-time checks on qualified names and patterns.
///
/// Both checks accept by default, so a validator only overrides what it
/// cares about.
pub trait RouteValidator: Send + Sync {
    fn check_name(&self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn check_pattern(&self, _pattern: &str) -> Result<()> {
        Ok(())
    }
}

/// Patterns must start with `/`
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingSlash;

impl RouteValidator for LeadingSlash {
    fn check_pattern(&self, pattern: &str) -> Result<()> {
        if pattern.starts_with('/') {
            Ok(())
        } else {
            Err(ConfigurationError::invalid_pattern(pattern, "pattern must start with '/'"))
        }
    }
}

/// Name check backed by a closure
pub struct CheckName<F>(F);

impl<F> CheckName<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> RouteValidator for CheckName<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    fn check_name(&self, name: &str) -> Result<()> {
        (self.0)(name)
    }
}

/// Pattern check backed by a closure
pub struct CheckPattern<F>(F);

impl<F> CheckPattern<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> RouteValidator for CheckPattern<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    fn check_pattern(&self, pattern: &str) -> Result<()> {
        (self.0)(pattern)
    }
}

/// Ordered validators; the first rejection stops the chain
pub struct ValidatorChain {
    validators: Vec<Box<dyn RouteValidator>>,
}

impl ValidatorChain {
    /// Empty chain, accepts everything
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn add<V: RouteValidator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    pub fn clear(&mut self) {
        self.validators.clear();
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn check_name(&self, name: &str) -> Result<()> {
        self.validators.iter().try_for_each(|v| v.check_name(name))
    }

    pub fn check_pattern(&self, pattern: &str) -> Result<()> {
        self.validators.iter().try_for_each(|v| v.check_pattern(pattern))
    }
}

impl Default for ValidatorChain {
    /// Just [`LeadingSlash`]
    fn default() -> Self {
        let mut chain = Self::new();
        chain.add(LeadingSlash);
        chain
    }
}

/// Wraps or replaces a handler before it is stored
pub type PrepareHandler<Req, Res> = Box<dyn Fn(Handler<Req, Res>) -> Handler<Req, Res> + Send + Sync>;
