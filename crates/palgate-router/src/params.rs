//! Route-parameter transformation.
//!
//! The router matches a path into a bag of raw strings. Views want typed
//! values, but parsing in every view duplicates policy; instead each route
//! declares a [`ParamSpec`] mapping a field name to a constructor, and the
//! bag is transformed once, before the view is reached.
//!
//! Constructors are strict: a value they cannot represent fails the whole
//! transformation (and with it the navigation) with a
//! [`ConstructionError`]. No field is ever silently defaulted.

use std::collections::BTreeMap;

use serde::Serialize;

use palgate_core::error::ConstructionError;

/// A typed route-parameter value.
///
/// Values start as [`Str`](ParamValue::Str) when matched out of the path
/// and stay that way unless a spec'd constructor replaces them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Raw string, as produced by path matching.
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Returns the string value, if still raw.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if constructed as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float value, if constructed as one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value, if constructed as one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this value is still the raw matched string.
    pub fn is_raw(&self) -> bool {
        matches!(self, ParamValue::Str(_))
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

/// A value constructor: raw string in, typed value or rejection reason out.
///
/// The transformation wraps a rejection into a [`ConstructionError`] naming
/// the offending parameter.
pub type Constructor = fn(&str) -> Result<ParamValue, String>;

/// The built-in constructors.
pub mod constructors {
    use super::ParamValue;

    /// Construct an integer; rejects anything `i64` cannot parse.
    pub fn int(raw: &str) -> Result<ParamValue, String> {
        raw.parse::<i64>()
            .map(ParamValue::Int)
            .map_err(|e| e.to_string())
    }

    /// Construct a float; rejects anything `f64` cannot parse.
    pub fn float(raw: &str) -> Result<ParamValue, String> {
        raw.parse::<f64>()
            .map(ParamValue::Float)
            .map_err(|e| e.to_string())
    }

    /// Construct a boolean; accepts only `true` and `false`.
    pub fn boolean(raw: &str) -> Result<ParamValue, String> {
        match raw {
            "true" => Ok(ParamValue::Bool(true)),
            "false" => Ok(ParamValue::Bool(false)),
            other => Err(format!("expected 'true' or 'false', got '{}'", other)),
        }
    }

    /// Keep the raw string. Useful to state a passthrough explicitly.
    pub fn string(raw: &str) -> Result<ParamValue, String> {
        Ok(ParamValue::Str(raw.to_string()))
    }
}

/// A route's parameter bag.
///
/// Owned by the router for the duration of one navigation and discarded on
/// the next. Access is by name; key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag of raw strings, as path matching produces it.
    pub fn from_raw(bag: BTreeMap<String, String>) -> Self {
        Self(
            bag.into_iter()
                .map(|(k, v)| (k, ParamValue::Str(v)))
                .collect(),
        )
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Insert a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Field-to-constructor specification, declared alongside the route.
///
/// Keys are a subset of the route's parameter names; fields without a
/// constructor pass through as raw strings.
#[derive(Debug, Clone, Default)]
pub struct ParamSpec {
    fields: BTreeMap<&'static str, Constructor>,
}

impl ParamSpec {
    /// Create an empty spec (the identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a constructor to a field.
    pub fn field(mut self, name: &'static str, constructor: Constructor) -> Self {
        self.fields.insert(name, constructor);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Transform a parameter bag.
    ///
    /// Pure function of (spec, bag): each spec'd field still holding a raw
    /// string goes through its constructor; already-typed values and
    /// unspec'd fields pass through unchanged, which makes re-application a
    /// no-op. Spec fields with no entry in the bag are never invoked.
    pub fn transform(&self, params: Params) -> Result<Params, ConstructionError> {
        if self.fields.is_empty() {
            return Ok(params);
        }

        let mut out = BTreeMap::new();
        for (key, value) in params.0 {
            let value = match (self.fields.get(key.as_str()), value) {
                (Some(constructor), ParamValue::Str(raw)) => {
                    constructor(&raw).map_err(|reason| ConstructionError {
                        param: key.clone(),
                        value: raw,
                        reason,
                    })?
                }
                (_, value) => value,
            };
            out.insert(key, value);
        }
        Ok(Params(out))
    }
}
