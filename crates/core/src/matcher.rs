//! Path matcher.

use crate::routes::{Route, RouteTable};

/// Index of the route selected for `path`.
///
/// The first exact pattern equal to `path` wins; otherwise the first
/// wildcard route, if any. `None` means the caller leaves the view unchanged.
pub fn match_index<N>(table: &RouteTable<N>, path: &str) -> Option<usize> {
    table
        .iter()
        .position(|route| route.pattern().matches_exactly(path))
        .or_else(|| table.iter().position(|route| route.pattern().is_wildcard()))
}

/// Route selected for `path`; see [`match_index`].
pub fn match_route<'a, N>(table: &'a RouteTable<N>, path: &str) -> Option<&'a Route<N>> {
    match_index(table, path).and_then(|index| table.get(index))
}
