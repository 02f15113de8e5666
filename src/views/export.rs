use std::path::Path;

use anyhow::Context;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontStyle};

use super::shape::{HAlign, Shape, Stroke, TextStyle as ShapeTextStyle, VAlign};
use super::year::HEADER_HEIGHT;
use crate::calendar::{Color as RgbColor, Point, Rect, PAGE_HEIGHT, PAGE_WIDTH};
use crate::config;

/// Dot and gap of dotted lines in grid units, never thinner than a pixel.
const DOT_LENGTH: f64 = 0.03;
const DOT_GAP: f64 = 0.06;

/// Maps grid units onto an SVG page and draws shapes with plotters.
#[derive(Debug, Clone)]
pub struct Canvas {
    unit: f64,
    margin: f64,
    font_family: String,
}

impl Canvas {
    pub fn new(page: &config::Page) -> Self {
        Self {
            unit: page.unit,
            margin: page.margin,
            font_family: page.font_family.clone(),
        }
    }

    /// Page size in pixels.
    pub fn size(&self) -> (u32, u32) {
        let width = PAGE_WIDTH.mul_add(self.unit, 2.0 * self.margin);
        let height = (HEADER_HEIGHT + PAGE_HEIGHT).mul_add(self.unit, 2.0 * self.margin);

        (width.ceil() as u32, height.ceil() as u32)
    }

    pub fn to_px(&self, point: Point) -> (i32, i32) {
        (
            point.x.mul_add(self.unit, self.margin).round() as i32,
            (HEADER_HEIGHT + point.y).mul_add(self.unit, self.margin).round() as i32,
        )
    }

    /// Pixel corners of `rect`. The top edge and the size are rounded once so
    /// rects of equal size keep equal pixel sizes wherever they sit.
    pub fn rect_px(&self, rect: Rect) -> [(i32, i32); 2] {
        let (x, y) = self.to_px(rect.top_left());
        let width = (rect.width * self.unit).round() as i32;
        let height = (rect.height * self.unit).floor().max(1.0) as i32;

        [(x, y), (x + width, y + height)]
    }

    /// Renders the page into an SVG document held in memory.
    pub fn render(&self, shapes: &[Shape]) -> anyhow::Result<String> {
        let mut svg = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            self.draw(&root, shapes).context("Failed to draw calendar page")?;
            root.present().context("Failed to finish SVG document")?;
        }

        Ok(svg)
    }

    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        shapes: &[Shape],
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        for shape in shapes {
            match shape {
                Shape::Line {
                    from,
                    to,
                    width,
                    color,
                    stroke,
                } => {
                    let style = ShapeStyle {
                        color: rgba(*color, 1.0),
                        filled: false,
                        stroke_width: self.stroke_width(*width),
                    };

                    match stroke {
                        Stroke::Solid => {
                            root.draw(&PathElement::new(vec![self.to_px(*from), self.to_px(*to)], style))?;
                        }
                        Stroke::Dotted => {
                            root.draw(&DashedPathElement::new(
                                pixel_path(self.to_px(*from), self.to_px(*to)),
                                self.dot_px(DOT_LENGTH),
                                self.dot_px(DOT_GAP),
                                style,
                            ))?;
                        }
                    }
                }
                Shape::Rect { rect, fill } => {
                    root.draw(&Rectangle::new(self.rect_px(*rect), rgba(*fill, 1.0).filled()))?;
                }
                Shape::Text { text, at, style } => {
                    root.draw(&Text::new(text.as_str(), self.to_px(*at), self.text_style(style)))?;
                }
            }
        }

        Ok(())
    }

    fn stroke_width(&self, width: f64) -> u32 {
        (width * self.unit).round().max(1.0) as u32
    }

    fn dot_px(&self, length: f64) -> u32 {
        (length * self.unit).round().max(1.0) as u32
    }

    fn text_style(&self, style: &ShapeTextStyle) -> TextStyle<'_> {
        let font_style = if style.bold { FontStyle::Bold } else { FontStyle::Normal };
        let font = FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            style.size * self.unit,
            font_style,
        );

        let h_pos = match style.h_align {
            HAlign::Left => HPos::Left,
            HAlign::Center => HPos::Center,
        };
        let v_pos = match style.v_align {
            VAlign::Top => VPos::Top,
            VAlign::Center => VPos::Center,
            VAlign::Bottom => VPos::Bottom,
        };

        TextStyle {
            font,
            color: rgba(style.color, style.alpha).to_backend_color(),
            pos: Pos::new(h_pos, v_pos),
        }
    }
}

/// Writes the page, creating the output directory first.
pub fn save(path: &Path, svg: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory at {}", parent.display()))?;
    }

    std::fs::write(path, svg).with_context(|| format!("Failed to write page at {}", path.display()))
}

/// Every pixel between `from` and `to`, so dashes start and end on whole pixels.
fn pixel_path(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![from];
    }

    (0..=steps)
        .map(|step| {
            let t = f64::from(step) / f64::from(steps);
            (
                from.0 + (f64::from(dx) * t).round() as i32,
                from.1 + (f64::from(dy) * t).round() as i32,
            )
        })
        .collect()
}

const fn rgba(color: RgbColor, alpha: f64) -> RGBAColor {
    RGBAColor(color.red, color.green, color.blue, alpha)
}
