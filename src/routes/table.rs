//! Static route table.

use std::collections::HashSet;
use std::fmt;

use super::pattern::PathPattern;
use super::RouteTableError;

/// Route identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Main,
    About,
    Profile,
    Articles,
    ArticleDetails,
    NotFound,
}

impl AppRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "home",
            Self::About => "about",
            Self::Profile => "profile",
            Self::Articles => "articles",
            Self::ArticleDetails => "article_details",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Page rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Profile,
    ArticlesList,
    ArticleDetails,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Profile => "Profile",
            Self::ArticlesList => "Articles",
            Self::ArticleDetails => "Article",
            Self::NotFound => "Page not found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: AppRoute,
    pub path: PathPattern,
    pub view: View,
    /// Render only for an authenticated session.
    pub auth_only: bool,
}

impl RouteEntry {
    pub fn new(id: AppRoute, path: &str, view: View) -> Result<Self, RouteTableError> {
        Ok(Self {
            id,
            path: PathPattern::parse(path)?,
            view,
            auth_only: false,
        })
    }

    pub fn auth_only(mut self) -> Self {
        self.auth_only = true;
        self
    }
}

/// Ordered route entries. The catch-all always sorts last, whatever the
/// declared order, so it never shadows a real route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, checking that ids are unique and that exactly one
    /// entry is the catch-all.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(RouteTableError::DuplicateRoute { id: entry.id });
            }
        }

        let (mut routes, catch_all): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| !entry.path.is_catch_all());
        if catch_all.len() != 1 {
            return Err(RouteTableError::CatchAllCount {
                found: catch_all.len(),
            });
        }
        routes.extend(catch_all);

        Ok(Self { entries: routes })
    }

    /// The application's routes.
    pub fn app_routes() -> Result<Self, RouteTableError> {
        Self::new(vec![
            RouteEntry::new(AppRoute::Main, "/", View::Home)?,
            RouteEntry::new(AppRoute::About, "/about", View::About)?,
            RouteEntry::new(AppRoute::Articles, "/articles", View::ArticlesList)?.auth_only(),
            RouteEntry::new(AppRoute::ArticleDetails, "/articles/:id", View::ArticleDetails)?
                .auth_only(),
            RouteEntry::new(AppRoute::Profile, "/profile", View::Profile)?.auth_only(),
            RouteEntry::new(AppRoute::NotFound, PathPattern::CATCH_ALL, View::NotFound)?,
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn get(&self, id: AppRoute) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn catch_all(&self) -> &RouteEntry {
        // Construction guarantees exactly one catch-all, stored last.
        &self.entries[self.entries.len() - 1]
    }
}

/// Path of an article's detail page.
pub fn article_details_path(id: &str) -> String {
    format!("/articles/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_routes_put_catch_all_last() {
        let table = RouteTable::app_routes().unwrap();
        let last = table.entries().last().unwrap();
        assert_eq!(last.id, AppRoute::NotFound);
        assert!(last.path.is_catch_all());
        assert_eq!(table.catch_all().id, AppRoute::NotFound);
    }

    #[test]
    fn app_routes_guard_private_pages() {
        let table = RouteTable::app_routes().unwrap();
        let guarded: Vec<AppRoute> = table
            .entries()
            .iter()
            .filter(|entry| entry.auth_only)
            .map(|entry| entry.id)
            .collect();
        assert_eq!(
            guarded,
            vec![AppRoute::Articles, AppRoute::ArticleDetails, AppRoute::Profile]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = RouteTable::new(vec![
            RouteEntry::new(AppRoute::Main, "/", View::Home).unwrap(),
            RouteEntry::new(AppRoute::Main, "/home", View::Home).unwrap(),
            RouteEntry::new(AppRoute::NotFound, "*", View::NotFound).unwrap(),
        ]);
        assert!(matches!(
            result,
            Err(RouteTableError::DuplicateRoute { id: AppRoute::Main })
        ));
    }

    #[test]
    fn missing_catch_all_is_rejected() {
        let result = RouteTable::new(vec![RouteEntry::new(AppRoute::Main, "/", View::Home).unwrap()]);
        assert!(matches!(
            result,
            Err(RouteTableError::CatchAllCount { found: 0 })
        ));
    }

    #[test]
    fn article_path_fills_id() {
        assert_eq!(article_details_path("7"), "/articles/7");
    }
}
