//! Composite layouts.
//!
//! A [`CompositeLayout`] is a tree of built charts joined by vertical and
//! horizontal concatenation, plus one [`Theme`] that applies to the whole
//! figure. Leaves never carry decoration settings of their own; the theme
//! lives at the root so that stripping borders reaches every panel.

use crate::error::{Error, Result};
use crate::grammar::{BuiltChart, Theme};

/// How a channel's scale is shared between concatenated children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// One scale for all children.
    Shared,
    /// One scale per child.
    Independent,
}

impl ResolveMode {
    /// Name used in chart specs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResolveMode::Shared => "shared",
            ResolveMode::Independent => "independent",
        }
    }
}

/// Scale resolution of a concatenation node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolve {
    /// Resolution of the x scale; renderer default when `None`.
    pub x: Option<ResolveMode>,
    /// Resolution of the y scale; renderer default when `None`.
    pub y: Option<ResolveMode>,
}

impl Resolve {
    /// Share the x scale.
    #[must_use]
    pub fn shared_x() -> Self {
        Self { x: Some(ResolveMode::Shared), y: None }
    }

    /// Share the y scale.
    #[must_use]
    pub fn shared_y() -> Self {
        Self { x: None, y: Some(ResolveMode::Shared) }
    }

    /// Whether nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// A single chart.
    Leaf(Box<BuiltChart>),
    /// Children stacked top to bottom.
    VConcat {
        /// Children in drawing order.
        children: Vec<LayoutNode>,
        /// Gap between children in pixels; negative values overlap.
        spacing: Option<i32>,
        /// Scale resolution.
        resolve: Resolve,
    },
    /// Children placed left to right.
    HConcat {
        /// Children in drawing order.
        children: Vec<LayoutNode>,
        /// Gap between children in pixels; negative values overlap.
        spacing: Option<i32>,
        /// Scale resolution.
        resolve: Resolve,
    },
}

impl LayoutNode {
    /// Whether the node is a single chart.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf(_))
    }

    /// Direct children (empty for a leaf).
    #[must_use]
    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Leaf(_) => &[],
            LayoutNode::VConcat { children, .. } | LayoutNode::HConcat { children, .. } => children,
        }
    }

    /// Charts in depth-first, left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&BuiltChart> {
        match self {
            LayoutNode::Leaf(chart) => vec![chart.as_ref()],
            _ => self.children().iter().flat_map(LayoutNode::leaves).collect(),
        }
    }

    /// Nesting depth; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(LayoutNode::depth).max().unwrap_or(0)
    }

    fn set_spacing(&mut self, value: i32) {
        if let LayoutNode::VConcat { spacing, .. } | LayoutNode::HConcat { spacing, .. } = self {
            *spacing = Some(value);
        }
    }

    fn set_resolve(&mut self, value: Resolve) {
        if let LayoutNode::VConcat { resolve, .. } | LayoutNode::HConcat { resolve, .. } = self {
            *resolve = value;
        }
    }
}

/// A figure: a layout tree plus the theme of the whole figure.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLayout {
    root: LayoutNode,
    theme: Theme,
}

impl From<BuiltChart> for CompositeLayout {
    fn from(chart: BuiltChart) -> Self {
        Self::leaf(chart)
    }
}

impl CompositeLayout {
    /// A figure holding one chart.
    #[must_use]
    pub fn leaf(chart: BuiltChart) -> Self {
        Self { root: LayoutNode::Leaf(Box::new(chart)), theme: Theme::default() }
    }

    /// Stack `parts` top to bottom.
    ///
    /// The figure theme combines the themes of all parts, so a decoration
    /// stripped in any part stays stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is empty.
    pub fn vconcat(parts: Vec<CompositeLayout>) -> Result<Self> {
        let (children, theme) = Self::split(parts, "vconcat")?;
        Ok(Self { root: LayoutNode::VConcat { children, spacing: None, resolve: Resolve::default() }, theme })
    }

    /// Place `parts` left to right.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is empty.
    pub fn hconcat(parts: Vec<CompositeLayout>) -> Result<Self> {
        let (children, theme) = Self::split(parts, "hconcat")?;
        Ok(Self { root: LayoutNode::HConcat { children, spacing: None, resolve: Resolve::default() }, theme })
    }

    fn split(parts: Vec<CompositeLayout>, kind: &str) -> Result<(Vec<LayoutNode>, Theme)> {
        let mut iter = parts.into_iter();
        let first = iter.next().ok_or_else(|| Error::invalid(format!("{kind} needs at least one part")))?;
        let mut theme = first.theme;
        let mut children = vec![first.root];
        for part in iter {
            theme = theme.combine(&part.theme);
            children.push(part.root);
        }
        Ok((children, theme))
    }

    /// Set the gap between the root's children. No effect on a single chart.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.root.set_spacing(spacing);
        self
    }

    /// Set the root's scale resolution. No effect on a single chart.
    #[must_use]
    pub fn resolve(mut self, resolve: Resolve) -> Self {
        self.root.set_resolve(resolve);
        self
    }

    /// Replace the figure theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    /// The figure theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Charts in depth-first, left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&BuiltChart> {
        self.root.leaves()
    }

    /// Nesting depth of the tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Whether the figure is a single chart.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}
