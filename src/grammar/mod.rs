//! Grammar of Graphics chart model.
//!
//! Provides declarative chart specification based on Wilkinson's
//! Grammar of Graphics [Wilkinson 2005].
//!
//! # Components
//!
//! - **Data**: Column-ordered tables of numbers, labels and missing values
//! - **Aesthetics**: Mappings from columns to channels (x, y, x2, y2, color)
//! - **Geometries**: Mark types (point, circle, bar, area, line)
//! - **Statistics**: Data transformations (identity, bin, density, jitter)
//! - **Coordinates**: Limits, zero inclusion and flipping
//! - **Axes and facets**: Guides and small multiples
//! - **Themes**: Decorations set once at the root of a layout
//!
//! # Example
//!
//! ```rust
//! use cosilico::grammar::*;
//!
//! let chart = Chart::new()
//!     .data_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])
//!     .geom(Geom::point())
//!     .aes(Aes::new().x("x").y("y").color_value(cosilico::color::Rgba::STEEL_BLUE))
//!     .build()
//!     .unwrap();
//! assert_eq!(chart.layer_count(), 1);
//! ```
//!
//! # References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Wickham, H. (2010). "A Layered Grammar of Graphics." Journal of Computational
//!   and Graphical Statistics.

mod aes;
mod axis;
mod chart;
mod coord;
mod data;
mod facet;
mod geom;
mod stat;
mod theme;

pub use aes::Aes;
pub use axis::{Axis, AxisTitle, Orient};
pub use chart::{BuiltChart, BuiltLayer, Chart, Layer};
pub use coord::Coord;
pub use data::{DataFrame, DataValue};
pub use facet::{Facet, Header};
pub use geom::{Geom, GeomType, Interpolate, Stack};
pub use stat::{Stat, DEFAULT_STEPS};
pub use theme::Theme;
