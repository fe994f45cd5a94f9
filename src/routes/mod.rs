//! Static route table mapping paths to views. Matching is purely structural:
//! no guards and no async resolution. Access control belongs to the API.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum View {
    Home,
    Projects,
    ProjectCreate,
    ProjectDetail,
    ProjectEdit,
    Login,
    Register,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Checked top to bottom, so literal segments must precede `:param` siblings.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    Route {
        path: "/projects",
        name: "Projects",
        view: View::Projects,
    },
    Route {
        path: "/projects/new",
        name: "ProjectCreate",
        view: View::ProjectCreate,
    },
    Route {
        path: "/projects/:id",
        name: "ProjectDetail",
        view: View::ProjectDetail,
    },
    Route {
        path: "/projects/:id/edit",
        name: "ProjectEdit",
        view: View::ProjectEdit,
    },
    Route {
        path: "/login",
        name: "Login",
        view: View::Login,
    },
    Route {
        path: "/register",
        name: "Register",
        view: View::Register,
    },
];

const NOT_FOUND: &str = "NotFound";

/// Result of resolving a path against [`ROUTES`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    pub params: BTreeMap<String, String>,
}

impl Route {
    /// Captured `:param` values when `path` matches this route.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern = segments(self.path);
        let actual = segments(path);
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, value) in pattern.iter().zip(actual) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), value.to_string());
                }
                None if *expected == value => {}
                None => return None,
            }
        }

        Some(params)
    }
}

/// Resolves `path` to the first matching route, or the `NotFound` fallback.
///
/// Query strings, fragments and trailing slashes are ignored.
#[must_use]
pub fn resolve(path: &str) -> RouteMatch {
    let path = strip_suffixes(path);

    ROUTES
        .iter()
        .find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                name: route.name,
                view: route.view,
                params,
            })
        })
        .unwrap_or_else(|| RouteMatch {
            name: NOT_FOUND,
            view: View::NotFound,
            params: BTreeMap::new(),
        })
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
