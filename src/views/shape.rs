use crate::calendar::{Color, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in grid units
    pub size: f64,
    pub color: Color,
    pub alpha: f64,
    pub bold: bool,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl TextStyle {
    pub const fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            alpha: 1.0,
            bold: false,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub const fn align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

/// A drawing primitive in grid units.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        /// Line width in grid units
        width: f64,
        color: Color,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        fill: Color,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
}
