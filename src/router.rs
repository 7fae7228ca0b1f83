//! Client-side routing for the four screens of the app.
//!
//! Locations are plain path strings with an optional query, the same
//! shape a browser address bar would carry. The only query parameter
//! the app honors is `success=true` on the contact route, which is
//! consumed here at parse time so it can never survive in a stored
//! route.

/// The four navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Gallery,
}

impl Route {
    /// The canonical path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Gallery => "/gallery",
        }
    }

    /// Label used by the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Gallery => "Gallery",
        }
    }

    /// Screens that open with a full-height hero image. The header is
    /// drawn over the hero on these screens and switches to light text.
    pub fn has_hero(self) -> bool {
        matches!(self, Route::Home | Route::About)
    }

    /// All routes, in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Gallery, Route::Contact];
}

/// A parsed location: the route plus the one query flag the app honors.
///
/// `success` is only ever set by [`parse`]; the stored route never
/// carries it, so a refresh or a later navigation cannot re-trigger the
/// registration toast without a fresh submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub success: bool,
}

impl Location {
    pub fn home() -> Self {
        Location { route: Route::Home, success: false }
    }
}

/// Parse a location string into a route and its `success` flag.
///
/// Unknown paths fall back to the home screen. The `success` flag is
/// honored only when the parameter equals the literal sentinel `true`
/// and the path is the contact route.
pub fn parse(input: &str) -> Location {
    let (path, query) = match input.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (input, None),
    };

    let route = match path.trim_end_matches('/') {
        "" => Route::Home,
        "/about" => Route::About,
        "/contact" => Route::Contact,
        "/gallery" => Route::Gallery,
        _ => Route::Home,
    };

    let success = route == Route::Contact
        && query.is_some_and(|q| {
            q.split('&')
                .any(|pair| pair.split_once('=') == Some(("success", "true")))
        });

    Location { route, success }
}

/// Format the redirect location a successful form submission lands on.
pub fn with_success(route: Route) -> String {
    format!("{}?success=true", route.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(parse("/").route, Route::Home);
        assert_eq!(parse("/about").route, Route::About);
        assert_eq!(parse("/contact").route, Route::Contact);
        assert_eq!(parse("/gallery").route, Route::Gallery);
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(parse("/pricing").route, Route::Home);
        assert_eq!(parse("garbage").route, Route::Home);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(parse("/about/").route, Route::About);
        assert_eq!(parse("/gallery/").route, Route::Gallery);
    }

    #[test]
    fn test_success_parameter_on_contact() {
        let loc = parse("/contact?success=true");
        assert_eq!(loc.route, Route::Contact);
        assert!(loc.success);
    }

    #[test]
    fn test_success_requires_exact_sentinel() {
        assert!(!parse("/contact?success=TRUE").success);
        assert!(!parse("/contact?success=1").success);
        assert!(!parse("/contact?success=").success);
        assert!(!parse("/contact").success);
    }

    #[test]
    fn test_success_ignored_off_contact() {
        assert!(!parse("/?success=true").success);
        assert!(!parse("/gallery?success=true").success);
    }

    #[test]
    fn test_success_among_other_parameters() {
        assert!(parse("/contact?ref=mail&success=true").success);
    }

    #[test]
    fn test_with_success_round_trips() {
        let loc = parse(&with_success(Route::Contact));
        assert_eq!(loc.route, Route::Contact);
        assert!(loc.success);
    }
}
