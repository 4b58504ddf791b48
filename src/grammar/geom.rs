//! Geometry (mark) types for chart layers.

use super::aes::Aes;
use super::stat::Stat;

/// Curve interpolation for line and area marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolate {
    /// Straight segments between samples.
    #[default]
    Linear,
    /// Piecewise-constant steps centered on samples.
    Step,
    /// Piecewise-constant steps starting at each sample.
    StepAfter,
    /// Monotone cubic smoothing.
    Monotone,
}

impl Interpolate {
    /// Name used in chart specs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Interpolate::Linear => "linear",
            Interpolate::Step => "step",
            Interpolate::StepAfter => "step-after",
            Interpolate::Monotone => "monotone",
        }
    }
}

/// How overlapping series on the measure axis are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stack {
    /// Series overlap, each drawn from zero.
    #[default]
    Overlap,
    /// Series stack on top of each other.
    Zero,
}

/// Geometry type specification.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomType {
    /// Point symbols (outlined unless `filled`).
    Point {
        /// Fill the symbol.
        filled: bool,
    },
    /// Filled circles.
    Circle,
    /// Bars (rectangles between x/x2 or y/y2).
    Bar,
    /// Area under a curve.
    Area {
        /// Curve interpolation.
        interpolate: Interpolate,
        /// Fill the area; outline only when false.
        filled: bool,
    },
    /// Line through samples.
    Line {
        /// Curve interpolation.
        interpolate: Interpolate,
    },
}

impl GeomType {
    /// Mark name used in chart specs.
    #[must_use]
    pub fn mark_name(&self) -> &'static str {
        match self {
            GeomType::Point { .. } => "point",
            GeomType::Circle => "circle",
            GeomType::Bar => "bar",
            GeomType::Area { .. } => "area",
            GeomType::Line { .. } => "line",
        }
    }
}

/// A geometry layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Geom {
    /// The geometry type.
    pub geom_type: GeomType,
    /// Layer-specific aesthetics.
    pub aes: Option<Aes>,
    /// Statistical transformation applied to the data before drawing.
    pub stat: Option<Stat>,
    /// Stacking of the measure axis, `None` for the renderer default.
    pub stack: Option<Stack>,
}

impl Geom {
    fn of(geom_type: GeomType) -> Self {
        Self { geom_type, aes: None, stat: None, stack: None }
    }

    /// Create a point geometry.
    #[must_use]
    pub fn point() -> Self {
        Self::of(GeomType::Point { filled: false })
    }

    /// Create a filled circle geometry.
    #[must_use]
    pub fn circle() -> Self {
        Self::of(GeomType::Circle)
    }

    /// Create a bar geometry.
    #[must_use]
    pub fn bar() -> Self {
        Self::of(GeomType::Bar)
    }

    /// Create a histogram: bars over a binning stat.
    #[must_use]
    pub fn histogram(maxbins: usize) -> Self {
        Self::bar().stat(Stat::bin(maxbins))
    }

    /// Create an area geometry.
    #[must_use]
    pub fn area() -> Self {
        Self::of(GeomType::Area { interpolate: Interpolate::Linear, filled: true })
    }

    /// Create a line geometry.
    #[must_use]
    pub fn line() -> Self {
        Self::of(GeomType::Line { interpolate: Interpolate::Linear })
    }

    /// Fill point symbols or areas.
    #[must_use]
    pub fn filled(mut self, filled: bool) -> Self {
        match &mut self.geom_type {
            GeomType::Point { filled: f } | GeomType::Area { filled: f, .. } => *f = filled,
            _ => {}
        }
        self
    }

    /// Set line/area interpolation.
    #[must_use]
    pub fn interpolate(mut self, interpolate: Interpolate) -> Self {
        match &mut self.geom_type {
            GeomType::Area { interpolate: i, .. } | GeomType::Line { interpolate: i } => {
                *i = interpolate;
            }
            _ => {}
        }
        self
    }

    /// Set stacking of the measure axis.
    #[must_use]
    pub fn stack(mut self, stack: Stack) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Add layer-specific aesthetics.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = Some(aes);
        self
    }

    /// Set statistical transformation.
    #[must_use]
    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = Some(stat);
        self
    }
}
