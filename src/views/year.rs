use chrono::Datelike;
use palette::Srgb;

use super::shape::{HAlign, Shape, Stroke, TextStyle, VAlign};
use crate::calendar::{
    Color, DayCell, DayEvents, GridService, Point, Rect, GRID_COLS, GRID_ROWS, PAGE_WIDTH,
    PANEL_COLS, WEEKDAY_LABELS,
};

/// Grid units reserved above the month panels for the title and weekday rows.
pub const HEADER_HEIGHT: f64 = 1.5;

const BLACK: Color = Srgb::new(0, 0, 0);
const GRAY: Color = Srgb::new(128, 128, 128);

const TITLE_SIZE: f64 = 0.42;
const WEEKDAY_SIZE: f64 = 0.21;
const DAY_SIZE: f64 = 0.21;
const EVENT_SIZE: f64 = 0.18;
const WATERMARK_SIZE: f64 = 4.6;
const WATERMARK_ALPHA: f64 = 0.2;

const DAY_INDENT: f64 = 0.05;

const HEADER_RULE_WIDTH: f64 = 0.06;
const BORDER_WIDTH: f64 = 0.03;
const GRID_LINE_WIDTH: f64 = 0.015;

/// The whole year page as a list of shapes.
pub struct YearView<'a> {
    grid: GridService,
    title: String,
    events: &'a DayEvents,
}

impl<'a> YearView<'a> {
    pub fn new(year: i32, title: impl Into<String>, events: &'a DayEvents) -> Self {
        Self {
            grid: GridService::new(year),
            title: title.into(),
            events,
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();

        self.view_header(&mut shapes);

        for month in 1..=12 {
            log::debug!("draw month {month:02}");
            self.view_month(&mut shapes, month);
        }

        shapes
    }

    fn view_header(&self, shapes: &mut Vec<Shape>) {
        shapes.push(Shape::Text {
            text: self.title.clone(),
            at: Point::new(0.0, -0.6),
            style: TextStyle::new(TITLE_SIZE, BLACK).bold(),
        });

        shapes.push(Shape::Line {
            from: Point::new(0.0, -0.5),
            to: Point::new(PAGE_WIDTH, -0.5),
            width: HEADER_RULE_WIDTH,
            color: BLACK,
            stroke: Stroke::Solid,
        });

        for panel_col in 0..PANEL_COLS {
            for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
                shapes.push(Shape::Text {
                    text: (*label).to_string(),
                    at: Point::new((panel_col * GRID_COLS + col) as f64 + 0.5, -0.15),
                    style: TextStyle::new(WEEKDAY_SIZE, BLACK)
                        .align(HAlign::Center, VAlign::Bottom),
                });
            }
        }
    }

    fn view_month(&self, shapes: &mut Vec<Shape>, month: u32) {
        let panel = GridService::panel_rect(month);

        view_panel(shapes, panel);

        shapes.push(Shape::Text {
            text: format!("{month:02}"),
            at: Point::new(panel.center().x, panel.y + panel.height * 0.6),
            style: TextStyle::new(WATERMARK_SIZE, GRAY)
                .bold()
                .alpha(WATERMARK_ALPHA)
                .align(HAlign::Center, VAlign::Center),
        });

        for cell in self.grid.month_days(month) {
            self.view_day(shapes, month, &cell);
        }
    }

    fn view_day(&self, shapes: &mut Vec<Shape>, month: u32, cell: &DayCell) {
        let rect = GridService::cell_rect(month, cell);

        shapes.push(Shape::Text {
            text: format!("{:02}", cell.date.day()),
            at: Point::new(rect.x + DAY_INDENT, rect.y + DAY_INDENT),
            style: TextStyle::new(DAY_SIZE, GRAY).align(HAlign::Left, VAlign::Top),
        });

        for (slot, event) in self.events.events_on(cell.date).enumerate() {
            let chip = GridService::chip_rect(rect, slot);

            shapes.push(Shape::Rect {
                rect: chip,
                fill: event.bg_color(),
            });

            shapes.push(Shape::Text {
                text: event.label().to_string(),
                at: Point::new(chip.center().x, chip.bottom()),
                style: TextStyle::new(EVENT_SIZE, event.fg_color())
                    .align(HAlign::Center, VAlign::Bottom),
            });
        }
    }
}

fn view_panel(shapes: &mut Vec<Shape>, panel: Rect) {
    let top_left = panel.top_left();
    let bottom_right = panel.bottom_right();

    let corners = [
        top_left,
        Point::new(bottom_right.x, top_left.y),
        bottom_right,
        Point::new(top_left.x, bottom_right.y),
    ];

    for (idx, from) in corners.iter().enumerate() {
        shapes.push(Shape::Line {
            from: *from,
            to: corners[(idx + 1) % corners.len()],
            width: BORDER_WIDTH,
            color: BLACK,
            stroke: Stroke::Solid,
        });
    }

    for row in 1..GRID_ROWS {
        let y = panel.y + row as f64;

        shapes.push(grid_line(Point::new(panel.x, y), Point::new(bottom_right.x, y)));
    }

    for col in 1..GRID_COLS {
        let x = panel.x + col as f64;

        shapes.push(grid_line(Point::new(x, panel.y), Point::new(x, bottom_right.y)));
    }
}

const fn grid_line(from: Point, to: Point) -> Shape {
    Shape::Line {
        from,
        to,
        width: GRID_LINE_WIDTH,
        color: BLACK,
        stroke: Stroke::Dotted,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::calendar::{DateKey, EventRecord, Rank};

    fn chips(shapes: &[Shape]) -> Vec<(Rect, Color)> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rect { rect, fill } => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }

    fn text_of(shape: &Shape) -> Option<&str> {
        match shape {
            Shape::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    fn texts(shapes: &[Shape]) -> Vec<&str> {
        shapes.iter().filter_map(text_of).collect()
    }

    #[test]
    fn empty_year_has_every_day_once() {
        let events = DayEvents::default();
        let shapes = YearView::new(2022, "2022 Events", &events).shapes();
        let texts = texts(&shapes);

        // 365 days + 12 watermarks + 28 weekday labels + title
        assert_eq!(texts.len(), 365 + 12 + 28 + 1);
        assert_eq!(texts[0], "2022 Events");
        assert!(chips(&shapes).is_empty());
    }

    #[test]
    fn first_event_takes_lowest_slot() {
        let mut events = DayEvents::default();
        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        events.push(DateKey::from(date), EventRecord::labeled("first", "", "red").unwrap());
        events.push(DateKey::from(date), EventRecord::labeled("second", "", "blue").unwrap());

        let shapes = YearView::new(2022, "t", &events).shapes();
        let chips = chips(&shapes);

        assert_eq!(chips.len(), 2);
        // Saturday of the first week in the January panel
        assert_eq!(chips[0].0, GridService::chip_rect(Rect::new(5.0, 0.0, 1.0, 1.0), 0));
        assert_eq!(chips[0].1, Srgb::new(255, 0, 0));
        assert!(chips[1].0.y < chips[0].0.y);
        assert_eq!(chips[1].1, Srgb::new(0, 0, 255));
    }

    #[test]
    fn deadlines_land_on_month_day() {
        let mut events = DayEvents::default();
        events.push(DateKey::MonthDay { month: 6, day: 15 }, EventRecord::deadline("KDD", Rank::A));

        let shapes = YearView::new(2022, "t", &events).shapes();
        let chips = chips(&shapes);

        // 2022-06-15 is a Wednesday in the third week row, panel (1, 1)
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].0.x, 7.0 + 2.0);
        assert!(chips[0].0.y > 6.0 + 2.0 && chips[0].0.y < 6.0 + 3.0);
        assert_eq!(chips[0].1, Rank::A.colors().1);

        let label = shapes
            .iter()
            .find(|shape| text_of(shape) == Some("KDD"))
            .unwrap();
        let Shape::Text { style, .. } = label else {
            unreachable!()
        };
        assert_eq!(style.color, Rank::A.colors().0);
    }

    #[test]
    fn impossible_days_are_not_drawn() {
        let mut events = DayEvents::default();
        events.push(
            DateKey::Date { year: 2022, month: 4, day: 31 },
            EventRecord::labeled("ghost", "", "").unwrap(),
        );

        let shapes = YearView::new(2022, "t", &events).shapes();

        assert!(chips(&shapes).is_empty());
        assert!(!texts(&shapes).contains(&"ghost"));
    }

    #[test]
    fn events_of_other_years_are_ignored() {
        let mut events = DayEvents::default();
        events.push(
            DateKey::Date { year: 2021, month: 1, day: 1 },
            EventRecord::labeled("old", "", "").unwrap(),
        );

        assert!(chips(&YearView::new(2022, "t", &events).shapes()).is_empty());
    }

    #[test]
    fn panel_has_border_and_dotted_grid() {
        let mut shapes = Vec::new();
        view_panel(&mut shapes, GridService::panel_rect(1));

        let dotted = shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Line { stroke: Stroke::Dotted, .. }))
            .count();

        assert_eq!(shapes.len(), 4 + 5 + 6);
        assert_eq!(dotted, 11);
    }

    #[test]
    fn shapes_are_deterministic() {
        let mut events = DayEvents::default();
        events.push(DateKey::MonthDay { month: 2, day: 2 }, EventRecord::deadline("A", Rank::B));

        let view = YearView::new(2023, "t", &events);

        assert_eq!(view.shapes(), view.shapes());
    }
}
