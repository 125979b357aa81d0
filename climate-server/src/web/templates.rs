//! Askama templates for the index page.

use askama::Template;

/// A route shown on the index page.
#[derive(Debug, Clone, Copy)]
pub struct RouteLink {
    /// Route pattern as displayed
    pub pattern: &'static str,

    /// Example URL to link to
    pub href: &'static str,

    /// What the route returns
    pub description: &'static str,
}

/// Every API route, in the order the index lists them.
pub const API_ROUTES: &[RouteLink] = &[
    RouteLink {
        pattern: "/api/v1.0/precipitation",
        href: "/api/v1.0/precipitation",
        description: "Daily precipitation for the last 12 months of data",
    },
    RouteLink {
        pattern: "/api/v1.0/stations",
        href: "/api/v1.0/stations",
        description: "Station ids that reported measurements",
    },
    RouteLink {
        pattern: "/api/v1.0/tobs",
        href: "/api/v1.0/tobs",
        description: "Observed temperatures for the last 12 months of data",
    },
    RouteLink {
        pattern: "/api/v1.0/<start>",
        href: "/api/v1.0/2017-01-01",
        description: "Min, max and average temperature from a start date",
    },
    RouteLink {
        pattern: "/api/v1.0/<start>/<end>",
        href: "/api/v1.0/2017-01-01/2017-01-31",
        description: "Min, max and average temperature between two dates, inclusive",
    },
];

/// Home page listing the available routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: &'static [RouteLink],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            routes: API_ROUTES,
        }
    }
}
