//! HTTP method tokens
//!
//! Routes carry their methods as metadata only. Tokens are free-form but
//! normalized to uppercase; `Method` covers the standard verbs so callers
//! don't have to spell them.

use crate::{ConfigurationError, Result};
use smallvec::SmallVec;
use std::fmt;

/// Standard HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
        }
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RFC 9110 `tchar`
#[inline]
fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

/// Normalized set of uppercase method tokens.
///
/// Duplicates (in any case) collapse to one entry. Equality ignores order;
/// iteration yields tokens in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Methods {
    tokens: SmallVec<[String; 4]>,
}

impl Methods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize caller-supplied tokens
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = Self::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() || !token.bytes().all(is_token_char) {
                return Err(ConfigurationError::InvalidMethod(token.to_string()));
            }
            let upper = token.to_ascii_uppercase();
            if !methods.tokens.contains(&upper) {
                methods.tokens.push(upper);
            }
        }
        Ok(methods)
    }

    /// Case-insensitive membership
    pub fn contains(&self, method: impl AsRef<str>) -> bool {
        let method = method.as_ref();
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(method))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl PartialEq for Methods {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.tokens.iter().any(|o| o == t))
    }
}

impl Eq for Methods {}

impl fmt::Display for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(token)?;
        }
        f.write_str("]")
    }
}
