//! Filterable chronology viewer for narrative scene catalogs.
//!
//! Two fixed catalogs of scenes, one per character, feed a pure query engine
//! that filters by arc, free-text search and minimum reveal percentage and
//! sorts by reveal percentage. [`TimelineView`] holds the current query
//! parameters for an interactive front end and [`Renderer`] draws the result
//! as a text timeline.
//!
//! ```rust
//! use chronoscope::{catalog, derive, QueryParameters};
//!
//! let params = QueryParameters::default().with_min_reveal(80).with_sort_ascending(false);
//! let scenes = derive(catalog::icarus(), &params);
//!
//! let ids: Vec<&str> = scenes.iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(ids, ["0717", "S90"]);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod render;
pub mod theme;
pub mod types;
pub mod view;

pub use builder::ViewBuilder;
pub use catalog::{Catalog, CatalogSet};
pub use config::Config;
pub use error::{ChronoscopeError, Result};
pub use query::{QueryParameters, derive, derive_from};
pub use render::Renderer;
pub use theme::{Rgb, Theme};
pub use types::{ArcFilter, Character, Scene, StoryArc};
pub use view::{TimelineView, ViewSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{ChronoscopeError, Result};

    pub use crate::{ArcFilter, Character, Scene, StoryArc};

    pub use crate::{Catalog, CatalogSet, QueryParameters, derive, derive_from};

    pub use crate::{Config, Renderer, TimelineView, ViewBuilder};
}
