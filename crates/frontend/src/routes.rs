//! Route table for the portal views
//!
//! Path patterns map to views with per-route metadata. Patterns use
//! `:name` segments for parameters; matching is trailing-slash tolerant.

use std::collections::HashMap;

/// Routed views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Organizations,
    OrganizationsList,
    OrganizationDetail,
    Users,
    SearchDocuments,
    Statistics,
    Account,
    Login,
}

/// Per-route metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Entry requires a stored access token
    pub requires_auth: bool,
    /// The navigation chrome is hidden on this view
    pub hide_nav: bool,
    /// Captured path parameters are handed to the view
    pub pass_props: bool,
}

impl RouteMeta {
    pub const NONE: Self = Self {
        requires_auth: false,
        hide_nav: false,
        pass_props: false,
    };
    pub const AUTH: Self = Self {
        requires_auth: true,
        hide_nav: false,
        pass_props: false,
    };
    pub const PROPS: Self = Self {
        requires_auth: false,
        hide_nav: false,
        pass_props: true,
    };
    pub const HIDE_NAV: Self = Self {
        requires_auth: false,
        hide_nav: true,
        pass_props: false,
    };
}

/// One entry of the route table
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub meta: RouteMeta,
}

/// Name of the login route, the redirect target for guarded navigations
pub const LOGIN_ROUTE: &str = "login";

static ROUTES: [Route; 8] = [
    Route {
        path: "/",
        name: "organizations",
        view: View::Organizations,
        meta: RouteMeta::NONE,
    },
    Route {
        path: "/category/organizations/:slug/",
        name: "orgs-by-category",
        view: View::OrganizationsList,
        meta: RouteMeta::PROPS,
    },
    Route {
        path: "/category/organizations/:slug/detail/",
        name: "org-detail",
        view: View::OrganizationDetail,
        meta: RouteMeta::PROPS,
    },
    Route {
        path: "/users/",
        name: "users",
        view: View::Users,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/search-documents/",
        name: "search",
        view: View::SearchDocuments,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/statistika/",
        name: "statistika",
        view: View::Statistics,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/account/",
        name: "account",
        view: View::Account,
        meta: RouteMeta::AUTH,
    },
    Route {
        path: "/login/",
        name: LOGIN_ROUTE,
        view: View::Login,
        meta: RouteMeta::HIDE_NAV,
    },
];

/// A recognized navigation target
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub route: &'static Route,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Parameters handed to the view, when the route passes them through
    pub fn props(&self) -> Option<&HashMap<String, String>> {
        self.route.meta.pass_props.then_some(&self.params)
    }
}

/// Path-to-view resolver over the fixed route table
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self {
        Self
    }

    /// The full route table
    pub fn routes(&self) -> &'static [Route] {
        &ROUTES
    }

    /// Routes shown in the navigation chrome
    pub fn nav_routes(&self) -> impl Iterator<Item = &'static Route> {
        ROUTES.iter().filter(|route| !route.meta.hide_nav)
    }

    /// Look a route up by name
    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        ROUTES.iter().find(|route| route.name == name)
    }

    /// Resolve a path against the table, capturing `:name` parameters
    pub fn recognize(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = split_segments(path);
        ROUTES.iter().find_map(|route| {
            let pattern: Vec<&str> = split_segments(route.path);
            if pattern.len() != segments.len() {
                return None;
            }
            let mut params = HashMap::new();
            for (pattern_segment, segment) in pattern.iter().zip(&segments) {
                if let Some(name) = pattern_segment.strip_prefix(':') {
                    params.insert(name.to_string(), (*segment).to_string());
                } else if pattern_segment != segment {
                    return None;
                }
            }
            Some(RouteMatch { route, params })
        })
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
