//! Path pattern matching.

use std::collections::BTreeMap;
use std::fmt;

use palgate_core::error::{Error, InvalidInputError};

/// A parsed route path pattern.
///
/// Segments are matched hierarchically, left to right:
///
/// - literal segments (`/index`) match themselves;
/// - `:name` segments match any single segment and capture it;
/// - a trailing `*name` segment captures the rest of the path, including an
///   empty remainder, and must be the last segment.
///
/// Patterns are validated at construction time; an invalid pattern never
/// reaches matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    CatchAll(String),
}

impl PathPattern {
    /// Parse a pattern such as `/`, `/index`, `/board/:id`, or `/*path`.
    ///
    /// # Errors
    ///
    /// Returns an error for a relative pattern, an empty segment, an
    /// unnamed `:`/`*` segment, or a `*` segment that is not last.
    pub fn parse(pattern: &str) -> Result<Self, Error> {
        let invalid = |reason: &str| {
            Error::from(InvalidInputError::RoutePattern {
                value: pattern.to_string(),
                reason: reason.to_string(),
            })
        };

        let trimmed = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let parts: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let mut segments = Vec::with_capacity(parts.len());
        for (idx, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter segment needs a name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(invalid("catch-all segment needs a name"));
                }
                if idx != parts.len() - 1 {
                    return Err(invalid("catch-all segment must be last"));
                }
                segments.push(Segment::CatchAll(name.to_string()));
            } else {
                segments.push(Segment::Literal((*part).to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Match a concrete path, producing the raw parameter bag on success.
    ///
    /// A trailing slash on the path is ignored; a relative path never
    /// matches.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let path = path.strip_prefix('/')?;
        let path = path.strip_suffix('/').unwrap_or(path);
        let given: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        let mut params = BTreeMap::new();
        let mut at = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if given.get(at).copied() != Some(lit.as_str()) {
                        return None;
                    }
                    at += 1;
                }
                Segment::Param(name) => {
                    let value = given.get(at)?;
                    params.insert(name.clone(), (*value).to_string());
                    at += 1;
                }
                Segment::CatchAll(name) => {
                    params.insert(name.clone(), given[at..].join("/"));
                    at = given.len();
                }
            }
        }

        if at == given.len() { Some(params) } else { None }
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
