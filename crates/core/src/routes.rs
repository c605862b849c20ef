//! Route table: a static, ordered list of path patterns and view actions.
//!
//! Matching is exact string equality plus a single wildcard fallback.
//! Trailing slashes are significant and parameterized segments are not
//! recognised: `/blog/:id` is just a literal path.

use std::fmt;
use std::rc::Rc;

use crate::render::RenderResult;

/// The wildcard marker.
pub const WILDCARD: &str = "*";

/// Well-known paths of the shell.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const BLOG: &str = "/blog";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
}

/// A route's location pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches a single path by string equality.
    Exact(String),
    /// Matches any path; consulted only after every exact pattern.
    Wildcard,
}

impl RoutePattern {
    /// `"*"` is the wildcard; everything else is an exact path.
    pub fn parse(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern == WILDCARD {
            Self::Wildcard
        } else {
            Self::Exact(pattern)
        }
    }

    /// Whether this exact pattern equals `path`. Wildcards never match here.
    #[must_use]
    pub fn matches_exactly(&self, path: &str) -> bool {
        matches!(self, Self::Exact(p) if p == path)
    }

    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// What a view action receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    /// Location that selected the route.
    pub path: String,
    /// Title of the selected route.
    pub title: String,
}

pub type ViewAction<N> = Rc<dyn Fn(&RouteContext) -> RenderResult<N>>;
pub type Hook = Rc<dyn Fn()>;

/// A mapping from a location pattern to a view-producing action.
pub struct Route<N> {
    pattern: RoutePattern,
    title: String,
    view: ViewAction<N>,
    on_enter: Option<Hook>,
    on_leave: Option<Hook>,
}

impl<N> Clone for Route<N> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            title: self.title.clone(),
            view: Rc::clone(&self.view),
            on_enter: self.on_enter.clone(),
            on_leave: self.on_leave.clone(),
        }
    }
}

impl<N> fmt::Debug for Route<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("title", &self.title)
            .field("has_on_enter", &self.on_enter.is_some())
            .field("has_on_leave", &self.on_leave.is_some())
            .finish()
    }
}

impl<N> Route<N> {
    /// Creates a route; `pattern` of `"*"` creates the wildcard route.
    pub fn new<F>(pattern: impl Into<String>, title: impl Into<String>, view: F) -> Self
    where
        F: Fn(&RouteContext) -> RenderResult<N> + 'static,
    {
        Self {
            pattern: RoutePattern::parse(pattern),
            title: title.into(),
            view: Rc::new(view),
            on_enter: None,
            on_leave: None,
        }
    }

    /// Hook invoked when this route becomes current.
    #[must_use]
    pub fn on_enter(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_enter = Some(Rc::new(hook));
        self
    }

    /// Hook invoked when another route replaces this one.
    #[must_use]
    pub fn on_leave(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_leave = Some(Rc::new(hook));
        self
    }

    pub const fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Runs the view action.
    pub fn render(&self, ctx: &RouteContext) -> RenderResult<N> {
        (self.view)(ctx)
    }

    pub(crate) fn enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    pub(crate) fn leave(&self) {
        if let Some(hook) = &self.on_leave {
            hook();
        }
    }
}

/// Ordered, immutable list of routes.
pub struct RouteTable<N> {
    routes: Vec<Route<N>>,
}

impl<N> fmt::Debug for RouteTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.routes.iter().map(Route::pattern))
            .finish()
    }
}

impl<N> RouteTable<N> {
    pub fn builder() -> RouteTableBuilder<N> {
        RouteTableBuilder { routes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Route<N>> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<N>> {
        self.routes.iter()
    }

    /// Whether a wildcard route is registered.
    pub fn has_wildcard(&self) -> bool {
        self.routes.iter().any(|r| r.pattern.is_wildcard())
    }

    /// Exact paths in table order, for building navigation menus and tests.
    pub fn exact_paths(&self) -> Vec<&str> {
        self.routes
            .iter()
            .filter_map(|r| match &r.pattern {
                RoutePattern::Exact(p) => Some(p.as_str()),
                RoutePattern::Wildcard => None,
            })
            .collect()
    }
}

/// Builder for [`RouteTable`].
pub struct RouteTableBuilder<N> {
    routes: Vec<Route<N>>,
}

impl<N> RouteTableBuilder<N> {
    /// Appends a prepared route.
    #[must_use]
    pub fn add(mut self, route: Route<N>) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends a route for `pattern`.
    #[must_use]
    pub fn route<F>(self, pattern: &str, title: &str, view: F) -> Self
    where
        F: Fn(&RouteContext) -> RenderResult<N> + 'static,
    {
        self.add(Route::new(pattern, title, view))
    }

    /// Appends the wildcard route.
    #[must_use]
    pub fn wildcard<F>(self, title: &str, view: F) -> Self
    where
        F: Fn(&RouteContext) -> RenderResult<N> + 'static,
    {
        self.add(Route::new(WILDCARD, title, view))
    }

    pub fn build(self) -> RouteTable<N> {
        RouteTable {
            routes: self.routes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderResult;

    fn text(markup: &'static str) -> impl Fn(&RouteContext) -> RenderResult<()> {
        move |_| RenderResult::markup(markup)
    }

    #[test]
    fn given_star_when_parsed_then_wildcard() {
        assert_eq!(RoutePattern::parse("*"), RoutePattern::Wildcard);
        assert_eq!(
            RoutePattern::parse("/about"),
            RoutePattern::Exact("/about".to_string())
        );
    }

    #[test]
    fn given_exact_pattern_when_compared_then_trailing_slash_differs() {
        let pattern = RoutePattern::parse("/about");
        assert!(pattern.matches_exactly("/about"));
        assert!(!pattern.matches_exactly("/about/"));
    }

    #[test]
    fn given_wildcard_when_compared_exactly_then_never_matches() {
        assert!(!RoutePattern::Wildcard.matches_exactly("*"));
    }

    #[test]
    fn given_builder_when_built_then_order_is_preserved() {
        let table = RouteTable::builder()
            .route(paths::HOME, "Home", text("home"))
            .route(paths::ABOUT, "About", text("about"))
            .wildcard("Not Found", text("404"))
            .build();

        assert_eq!(table.len(), 3);
        assert!(table.has_wildcard());
        assert_eq!(table.exact_paths(), vec!["/", "/about"]);
    }

    #[test]
    fn given_route_when_displayed_then_pattern_text() {
        assert_eq!(RoutePattern::Wildcard.to_string(), "*");
        assert_eq!(RoutePattern::parse("/blog").to_string(), "/blog");
    }

    #[test]
    fn given_well_known_paths_when_checked_then_unique_and_clean() {
        let all = [
            paths::HOME,
            paths::ABOUT,
            paths::BLOG,
            paths::LOGIN,
            paths::REGISTER,
            paths::DASHBOARD,
        ];
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        for path in all.iter().skip(1) {
            assert!(path.starts_with('/'));
            assert!(!path.ends_with('/'));
        }
    }
}
