//! fusi-router: named route registry
//!
//! Binds route names and URL patterns to opaque handlers. The registry
//! stores handlers; it never calls them.
//!
//! ## Features
//! - Router-level name (`public.home`) and pattern prefix (`/v1/users`)
//! - Lookup by qualified name or by pattern, each with a name fallback
//! - Exact-string pattern matching by default, pluggable via [`PatternMatcher`]
//! - Composable registration validators ([`RouteValidator`])
//! - Memoized pattern lookups, cleared on every registration
//!
//! ## Example
//! ```
//! use fusi_router::{Handler, Router, RouterConfig};
//!
//! let mut router: Router<(), &str> =
//!     Router::with_config(RouterConfig::new().name("public").prefix("/v1")).unwrap();
//! router.add_route("home", "/home", Handler::new("home", |_| "Hello world"), ["get"]).unwrap();
//! router.add_route("not_found", "/404", Handler::new("not_found", |_| "Not found"), ["GET"]).unwrap();
//!
//! let route = router.match_pattern("/v1/home", None).unwrap();
//! assert_eq!(route.name(), "public.home");
//! assert!(route.allows("GET"));
//! assert_eq!(route.handler().call(()), "Hello world");
//!
//! let route = router.match_pattern("/v1/missing", Some("public.not_found")).unwrap();
//! assert_eq!(route.pattern(), "/v1/404");
//! assert!(router.match_name("public.missing", None).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod error;
pub mod handler;
pub mod method;
pub mod policy;
pub mod route;
pub mod router;

pub use cache::{CacheConfig, CacheStats};
pub use config::RouterConfig;
pub use error::{ConfigurationError, Result};
pub use handler::{Handler, HandlerFn};
pub use method::{Method, Methods};
pub use policy::{
    CheckName, CheckPattern, ExactMatcher, FnMatcher, LeadingSlash, PatternMatcher, PrepareHandler,
    RouteValidator, ValidatorChain,
};
pub use route::Route;
pub use router::Router;
