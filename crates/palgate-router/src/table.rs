//! Route table with lazy view loading.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tokio::sync::OnceCell;
use tracing::debug;

use palgate_core::Result;

use crate::params::{ParamSpec, Params};
use crate::pattern::PathPattern;

/// Shared loader producing a route's view on first navigation.
type ViewLoader<V> = Arc<dyn Fn() -> BoxFuture<'static, V> + Send + Sync>;

/// A single path → view binding.
///
/// The loader runs only when the route is first navigated to; the loaded
/// view is cached, so later navigations reuse it without running the
/// loader again.
pub struct Route<V> {
    pattern: PathPattern,
    spec: ParamSpec,
    loader: ViewLoader<V>,
    view: OnceCell<V>,
}

impl<V> Route<V> {
    /// Declare a route with a lazy view loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid.
    pub fn new<F, Fut>(pattern: &str, loader: F) -> Result<Self>
    where
        V: 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            spec: ParamSpec::new(),
            loader: Arc::new(move || loader().boxed()),
            view: OnceCell::new(),
        })
    }

    /// Attach a parameter spec, applied to every match of this route.
    pub fn with_params(mut self, spec: ParamSpec) -> Self {
        self.spec = spec;
        self
    }

    /// The pattern as declared.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    async fn view(&self) -> &V {
        self.view.get_or_init(|| (self.loader)()).await
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("loaded", &self.view.initialized())
            .finish_non_exhaustive()
    }
}

/// The static route table.
///
/// Declared routes are tried in declaration order. The fallback is stored
/// outside that list and consulted only after every declared route has
/// failed to match, so it can never shadow one. Resolution therefore always
/// yields a route.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    fallback: Route<V>,
}

impl<V> RouteTable<V> {
    /// Create a table with its catch-all fallback.
    ///
    /// The fallback's own pattern (typically `/*path`) only determines
    /// which parameters it receives; it is used whenever nothing else
    /// matches.
    pub fn new(fallback: Route<V>) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Declare a route. Order matters: earlier routes win.
    pub fn route(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve a path into a route and its transformed parameters.
    ///
    /// Undeclared paths resolve to the fallback, never to an error. The
    /// only failure mode is a parameter constructor rejecting its input,
    /// which aborts the navigation.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_, V>> {
        for route in &self.routes {
            if let Some(bag) = route.pattern.matches(path) {
                debug!(path, pattern = route.pattern.as_str(), "route matched");
                let params = route.spec.transform(Params::from_raw(bag))?;
                return Ok(Resolved { route, params });
            }
        }

        debug!(path, "no route matched, using fallback");
        let bag = self.fallback.pattern.matches(path).unwrap_or_default();
        let params = self.fallback.spec.transform(Params::from_raw(bag))?;
        Ok(Resolved {
            route: &self.fallback,
            params,
        })
    }
}

/// One navigation's resolution: the matched route and its parameters.
///
/// The params live for this navigation only; the next `resolve` produces a
/// fresh set.
#[derive(Debug)]
pub struct Resolved<'a, V> {
    route: &'a Route<V>,
    params: Params,
}

impl<'a, V> Resolved<'a, V> {
    /// The transformed parameters for this navigation.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Consume the resolution, keeping only the parameters.
    pub fn into_params(self) -> Params {
        self.params
    }

    /// The matched route's pattern.
    pub fn pattern(&self) -> &str {
        self.route.pattern()
    }

    /// The route's view, loading it on first use.
    ///
    /// Navigation suspends until the loader resolves; nothing else is
    /// blocked while it runs.
    pub async fn view(&self) -> &'a V {
        self.route.view().await
    }
}
