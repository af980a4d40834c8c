//! Tuple displays: spliced sequence layout with replacement parentheses.

use telltale::{
    display_tuple, ColorChoice, Display, Inspect, Nesting, PrintOptions, TextPrinter,
};

fn printer(width: usize) -> TextPrinter {
    TextPrinter::new(
        PrintOptions::default()
            .width(width)
            .color(ColorChoice::Never),
    )
}

fn render(display: &Display<'_>, width: usize) -> String {
    display.render(&Nesting::new(), &printer(width))
}

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn simple() {
    assert_eq!(render(&display_tuple("Hello", "world"), 80), "Hello('world')");

    assert_eq!(
        render(&display_tuple("Hello", r#""world""#), 80),
        r#"Hello('"world"')"#
    );

    assert_eq!(
        render(&display_tuple("Hello", "'world'"), 80),
        r#"Hello("'world'")"#
    );

    assert_eq!(
        render(&display_tuple("Hello", r#"'world', "world""#), 80),
        r#"Hello(`'world', "world"`)"#
    );

    assert_eq!(
        render(&display_tuple("Hello", r#"'world', "world", `world`"#), 80),
        r#"Hello('\'world\', "world", `world`')"#
    );
}

#[test]
fn descriptions() {
    assert_eq!(
        render(&display_tuple("Hello", "world").description("short"), 80),
        "Hello[short]('world')"
    );
}

#[test]
fn annotations() {
    assert_eq!(
        render(&display_tuple("Hello", "world").annotation("short"), 80),
        "Hello('world' short)"
    );

    assert_eq!(
        render(&display_tuple("Hello", "world").annotation("short"), 10),
        lines(&["Hello(", "  'world'", " short)"])
    );
}

struct Point {
    x: i64,
    y: i64,
}

impl Point {
    fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Inspect for Point {
    fn display(&self) -> Display<'_> {
        display_tuple("Point", vec![self.x, self.y])
    }
}

struct Line {
    start: Point,
    end: Point,
}

impl Line {
    fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Inspect for Line {
    fn display(&self) -> Display<'_> {
        display_tuple("Line", vec![self.start.as_value(), self.end.as_value()])
    }
}

struct Polygon {
    lines: Vec<Line>,
}

impl Inspect for Polygon {
    fn display(&self) -> Display<'_> {
        display_tuple(
            "Polygon",
            self.lines.iter().map(Inspect::as_value).collect::<Vec<_>>(),
        )
    }
}

fn polygon() -> Polygon {
    Polygon {
        lines: vec![
            Line::new(Point::new(1, 2), Point::new(3, 4)),
            Line::new(Point::new(5, 6), Point::new(7, 8)),
            Line::new(Point::new(9, 10), Point::new(11, 12)),
            Line::new(Point::new(11, 12), Point::new(1, 2)),
        ],
    }
}

#[test]
fn nested_keeps_names_at_every_depth() {
    assert_eq!(
        printer(80).print(&polygon()),
        lines(&[
            "Polygon(",
            "  Line(Point(1, 2), Point(3, 4)),",
            "  Line(Point(5, 6), Point(7, 8)),",
            "  Line(Point(9, 10), Point(11, 12)),",
            "  Line(Point(11, 12), Point(1, 2))",
            ")",
        ])
    );
}

#[test]
fn nested_wraps_inner_tuples_when_narrow() {
    assert_eq!(
        printer(20).print(&polygon()),
        lines(&[
            "Polygon(",
            "  Line(",
            "    Point(1, 2),",
            "    Point(3, 4)",
            "  ),",
            "  Line(",
            "    Point(5, 6),",
            "    Point(7, 8)",
            "  ),",
            "  Line(",
            "    Point(9, 10),",
            "    Point(11, 12)",
            "  ),",
            "  Line(",
            "    Point(11, 12),",
            "    Point(1, 2)",
            "  )",
            ")",
        ])
    );
}

#[test]
fn two_element_polygon_stays_single_line() {
    let polygon = Polygon {
        lines: vec![
            Line::new(Point::new(1, 2), Point::new(3, 4)),
            Line::new(Point::new(5, 6), Point::new(7, 8)),
        ],
    };
    assert_eq!(
        printer(80).print(&polygon),
        "Polygon(Line(Point(1, 2), Point(3, 4)), Line(Point(5, 6), Point(7, 8)))"
    );
}
