//! Output encoders (Vega-Lite JSON).

mod vega_lite;

pub use vega_lite::{write_json, VegaLiteEncoder, SCHEMA_URL};
