//! Faceting for charts.
//!
//! Creates small multiples by splitting data on one variable.

use super::axis::{AxisTitle, Orient};

/// Header drawn above or beside each facet panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// Header title (the facet variable name by default).
    pub title: AxisTitle,
    /// Draw one label per panel.
    pub labels: Option<bool>,
    /// Label rotation in degrees.
    pub label_angle: Option<f64>,
    /// Where the title sits.
    pub title_orient: Option<Orient>,
    /// Where the labels sit.
    pub label_orient: Option<Orient>,
    /// Horizontal label alignment (`left`, `center`, `right`).
    pub label_align: Option<&'static str>,
    /// Gap between labels and panels in pixels.
    pub label_padding: Option<f64>,
}

/// Faceting specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Facet {
    /// No faceting.
    #[default]
    None,
    /// One panel per value, laid out as columns.
    Col {
        /// Column to facet by.
        var: String,
        /// Panel headers.
        header: Header,
    },
    /// One panel per value, laid out as rows.
    Row {
        /// Column to facet by.
        var: String,
        /// Panel headers.
        header: Header,
    },
}

impl Facet {
    /// No faceting.
    #[must_use]
    pub fn none() -> Self {
        Facet::None
    }

    /// Facet into columns.
    #[must_use]
    pub fn col(var: &str, header: Header) -> Self {
        Facet::Col { var: var.to_string(), header }
    }

    /// Facet into rows.
    #[must_use]
    pub fn row(var: &str, header: Header) -> Self {
        Facet::Row { var: var.to_string(), header }
    }

    /// The facet variable, if any.
    #[must_use]
    pub fn var(&self) -> Option<&str> {
        match self {
            Facet::None => None,
            Facet::Col { var, .. } | Facet::Row { var, .. } => Some(var),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_none() {
        assert_eq!(Facet::none(), Facet::None);
        assert_eq!(Facet::default().var(), None);
    }

    #[test]
    fn test_facet_col() {
        let header = Header { label_angle: Some(-90.0), ..Header::default() };
        let f = Facet::col("species", header.clone());
        assert_eq!(f.var(), Some("species"));
        match f {
            Facet::Col { header: h, .. } => assert_eq!(h, header),
            other => panic!("Expected Col, got {other:?}"),
        }
    }

    #[test]
    fn test_facet_row() {
        assert_eq!(Facet::row("g", Header::default()).var(), Some("g"));
    }
}
