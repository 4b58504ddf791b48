//! Cartesian coordinate settings for a chart.
//!
//! Limits and zero-inclusion are given in data orientation (x is the
//! variable a stat summarizes). `flip` swaps the rendered channels, which is
//! how a marginal on the right of a joint plot puts its value axis vertical.

use crate::scale::Domain;

/// Cartesian coordinate system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coord {
    /// X scale domain; the renderer picks one when `None`.
    pub xlim: Option<Domain>,
    /// Y scale domain; the renderer picks one when `None`.
    pub ylim: Option<Domain>,
    /// Whether the x scale must include zero.
    pub zero_x: Option<bool>,
    /// Whether the y scale must include zero.
    pub zero_y: Option<bool>,
    /// Whether to flip x and y.
    pub flip: bool,
}

impl Coord {
    /// Create a Cartesian coordinate system.
    #[must_use]
    pub fn cartesian() -> Self {
        Self::default()
    }

    /// Set x-axis limits.
    #[must_use]
    pub fn xlim(mut self, domain: Domain) -> Self {
        self.xlim = Some(domain);
        self
    }

    /// Set y-axis limits.
    #[must_use]
    pub fn ylim(mut self, domain: Domain) -> Self {
        self.ylim = Some(domain);
        self
    }

    /// Require (or forbid) zero on the x scale.
    #[must_use]
    pub fn zero_x(mut self, zero: bool) -> Self {
        self.zero_x = Some(zero);
        self
    }

    /// Require (or forbid) zero on the y scale.
    #[must_use]
    pub fn zero_y(mut self, zero: bool) -> Self {
        self.zero_y = Some(zero);
        self
    }

    /// Flip x and y axes.
    #[must_use]
    pub fn flip(mut self) -> Self {
        self.flip = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_cartesian() {
        let x = Domain { min: 0.0, max: 10.0 };
        let y = Domain { min: -5.0, max: 5.0 };
        let c = Coord::cartesian().xlim(x).ylim(y);
        assert_eq!(c.xlim, Some(x));
        assert_eq!(c.ylim, Some(y));
        assert!(!c.flip);
    }

    #[test]
    fn test_coord_flip() {
        assert!(Coord::cartesian().flip().flip);
    }

    #[test]
    fn test_coord_zero() {
        let c = Coord::cartesian().zero_x(false).zero_y(true);
        assert_eq!(c.zero_x, Some(false));
        assert_eq!(c.zero_y, Some(true));
    }

    #[test]
    fn test_coord_default() {
        let c = Coord::default();
        assert!(c.xlim.is_none() && c.ylim.is_none() && c.zero_x.is_none() && !c.flip);
    }
}
