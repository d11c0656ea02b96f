//! Immutable route table with exact path matching.

use std::collections::HashMap;

use super::route::Route;
use crate::error::RouteError;

/// Validated, ordered set of routes.
///
/// Built once from a declarative list and never mutated afterwards. Paths and
/// names are indexed so both lookups are O(1).
#[derive(Debug)]
pub struct RouteTable<P> {
    routes: Vec<Route<P>>,
    by_path: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl<P> RouteTable<P> {
    /// Builds the table, rejecting duplicate paths or names.
    pub fn new(routes: impl IntoIterator<Item = Route<P>>) -> Result<Self, RouteError> {
        let routes: Vec<Route<P>> = routes.into_iter().collect();
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if by_path.insert(route.path(), index).is_some() {
                return Err(RouteError::DuplicatePath {
                    path: route.path().to_string(),
                });
            }
            if by_name.insert(route.name(), index).is_some() {
                return Err(RouteError::DuplicateName {
                    name: route.name().to_string(),
                });
            }
        }

        Ok(Self {
            routes,
            by_path,
            by_name,
        })
    }

    /// Finds the route whose path equals `path` exactly.
    pub fn resolve(&self, path: &str) -> Result<&Route<P>, RouteError> {
        self.by_path
            .get(path)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| RouteError::NotMatched {
                path: path.to_string(),
            })
    }

    /// Finds the route with the given symbolic name.
    pub fn by_name(&self, name: &str) -> Result<&Route<P>, RouteError> {
        self.by_name
            .get(name)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| RouteError::NameNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the declared path of the named route.
    pub fn url_for(&self, name: &str) -> Result<&'static str, RouteError> {
        self.by_name(name).map(Route::path)
    }

    /// Resolves `path` and produces its page, loading it on first use.
    pub async fn load(&self, path: &str) -> Result<P, RouteError>
    where
        P: Clone,
    {
        let route = self.resolve(path)?;
        route.load().await.map_err(|source| {
            tracing::error!(route = route.name(), error = %source, "page load failed");
            RouteError::Load {
                name: route.name().to_string(),
                source,
            }
        })
    }

    /// Iterates routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<P>> {
        self.routes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::error::LoadError;

    fn page_one() -> LocalBoxFuture<'static, Result<&'static str, LoadError>> {
        async { Ok("one") }.boxed_local()
    }

    fn page_two() -> LocalBoxFuture<'static, Result<&'static str, LoadError>> {
        async { Ok("two") }.boxed_local()
    }

    fn broken() -> LocalBoxFuture<'static, Result<&'static str, LoadError>> {
        async {
            Err(LoadError::Unavailable {
                reason: "404".to_string(),
            })
        }
        .boxed_local()
    }

    fn table() -> RouteTable<&'static str> {
        RouteTable::new([
            Route::new("/", "one", page_one),
            Route::new("/two", "two", page_two),
            Route::new("/broken", "broken", broken),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let table = table();
        assert_eq!(table.resolve("/two").unwrap().name(), "two");
        assert!(matches!(
            table.resolve("/two/"),
            Err(RouteError::NotMatched { .. })
        ));
        assert!(matches!(
            table.resolve("/TWO"),
            Err(RouteError::NotMatched { .. })
        ));
        assert!(matches!(table.resolve(""), Err(RouteError::NotMatched { .. })));
    }

    #[test]
    fn test_url_for() {
        let table = table();
        assert_eq!(table.url_for("one"), Ok("/"));
        assert_eq!(
            table.url_for("three"),
            Err(RouteError::NameNotFound {
                name: "three".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new([
            Route::new("/a", "a", page_one),
            Route::new("/a", "b", page_two),
        ]);
        assert_eq!(
            result.err(),
            Some(RouteError::DuplicatePath {
                path: "/a".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RouteTable::new([
            Route::new("/a", "same", page_one),
            Route::new("/b", "same", page_two),
        ]);
        assert_eq!(
            result.err(),
            Some(RouteError::DuplicateName {
                name: "same".to_string()
            })
        );
    }

    #[test]
    fn test_iter_keeps_declaration_order() {
        let names: Vec<_> = table().iter().map(Route::name).collect();
        assert_eq!(names, ["one", "two", "broken"]);
        assert_eq!(table().len(), 3);
        assert!(!table().is_empty());
    }

    #[tokio::test]
    async fn test_load_unmatched_path() {
        let table = table();
        assert!(matches!(
            table.load("/missing").await,
            Err(RouteError::NotMatched { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_failure_names_route() {
        let table = table();
        match table.load("/broken").await {
            Err(RouteError::Load { name, source }) => {
                assert_eq!(name, "broken");
                assert_eq!(
                    source,
                    LoadError::Unavailable {
                        reason: "404".to_string()
                    }
                );
            }
            other => panic!("expected load failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_only_touches_requested_route() {
        let table = table();
        assert_eq!(table.load("/two").await, Ok("two"));
        assert_eq!(table.resolve("/two").unwrap().load_count(), 1);
        assert_eq!(table.resolve("/").unwrap().load_count(), 0);
    }
}
