//! palgate-router - Typed route parameters and the panel route table.
//!
//! Path matching produces a stringly-typed parameter bag; a [`ParamSpec`]
//! attached at the route's declaration site coerces chosen fields into
//! typed [`ParamValue`]s before any view sees them. The [`RouteTable`]
//! binds paths to lazily-loaded views with a fallback that is structurally
//! last and so can never shadow a declared route.

pub mod params;
pub mod pattern;
pub mod table;

pub use params::{Constructor, ParamSpec, ParamValue, Params, constructors};
pub use pattern::PathPattern;
pub use table::{Resolved, Route, RouteTable};
