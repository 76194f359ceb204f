//! Routing table: URL fragments to views.
//!
//! Unknown fragments redirect to [`Route::Main`].

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use log::debug;

use crate::models::Id;

/// One view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Dashboard with flights currently in the air
    #[default]
    Main,
    Stewards,
    Steward(Id),
    Flights,
    Flight(Id),
    Airplanes,
    Airplane(Id),
    Destinations,
    Destination(Id),
}

impl Route {
    /// Resolves a fragment, falling back to [`Route::Main`] for anything the
    /// table does not know.
    pub fn resolve(fragment: &str) -> Self {
        let path = fragment.trim().trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        fn detail(make: fn(Id) -> Route, raw: &str) -> Option<Route> {
            raw.parse().map(make).ok()
        }

        let route = match segments.as_slice() {
            ["main"] => Some(Route::Main),
            ["stewards"] => Some(Route::Stewards),
            ["steward", id] => detail(Route::Steward, id),
            ["flights"] => Some(Route::Flights),
            ["flight", id] => detail(Route::Flight, id),
            ["airplanes"] => Some(Route::Airplanes),
            ["airplane", id] => detail(Route::Airplane, id),
            ["destinations"] => Some(Route::Destinations),
            ["destinations", id] => detail(Route::Destination, id),
            _ => None,
        };

        route.unwrap_or_else(|| {
            debug!("No route for '{fragment}', redirecting to /main");
            Route::Main
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Main => write!(f, "/main"),
            Route::Stewards => write!(f, "/stewards"),
            Route::Steward(id) => write!(f, "/steward/{id}"),
            Route::Flights => write!(f, "/flights"),
            Route::Flight(id) => write!(f, "/flight/{id}"),
            Route::Airplanes => write!(f, "/airplanes"),
            Route::Airplane(id) => write!(f, "/airplane/{id}"),
            Route::Destinations => write!(f, "/destinations"),
            Route::Destination(id) => write!(f, "/destinations/{id}"),
        }
    }
}

/// Shared handle to the current path; navigation only ever sets it.
#[derive(Debug, Clone, Default)]
pub struct Location {
    current: Arc<Mutex<Route>>,
}

impl Location {
    pub fn path(&self) -> Route {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_path(&self, route: Route) {
        debug!("Navigating to {route}");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = route;
    }
}
