use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Signup,
    NotFound,
}

impl Route {
    pub fn from_url(url: &str) -> Self {
        let url = web_sys::Url::new(url).unwrap_throw();
        Self::from_path(&url.pathname(), CONFIG.root_path)
    }

    pub fn from_path(pathname: &str, root_path: &str) -> Self {
        let Some(rest) = pathname.strip_prefix(root_path) else {
            return Self::NotFound;
        };

        // "/spacex" must not count as being under "/space"
        if !root_path.is_empty() && !rest.is_empty() && !rest.starts_with('/') {
            return Self::NotFound;
        }

        let paths = rest
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        match paths.as_slice() {
            [] | ["signup"] => Self::Signup,
            _ => Self::NotFound,
        }
    }

    pub fn signal() -> impl Signal<Item = Route> {
        dominator::routing::url()
            .signal_cloned()
            .map(|url| Route::from_url(&url))
    }

    pub fn get() -> Route {
        Route::from_url(&dominator::routing::url().lock_ref())
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Route::Signup => "signup",
            Route::NotFound => "404",
        };
        write!(f, "{}", s)
    }
}
