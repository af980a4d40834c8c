//! Struct displays rendered through the reference printer.

use telltale::{
    display_struct, fields, ColorChoice, Display, Inspect, Nesting, PrintOptions, TextPrinter,
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
    assert_eq!(
        render(&display_struct("Hello", fields! { world: "world" }), 80),
        "Hello { world: 'world' }"
    );

    assert_eq!(
        render(&display_struct("Hello", fields! { world: r#""world""# }), 80),
        r#"Hello { world: '"world"' }"#
    );

    assert_eq!(
        render(&display_struct("Hello", fields! { world: "'world'" }), 80),
        r#"Hello { world: "'world'" }"#
    );

    assert_eq!(
        render(
            &display_struct("Hello", fields! { world: r#"'world', "world""# }),
            80
        ),
        r#"Hello { world: `'world', "world"` }"#
    );

    assert_eq!(
        render(
            &display_struct("Hello", fields! { world: r#"'world', "world", `world`"# }),
            80
        ),
        r#"Hello { world: '\'world\', "world", `world`' }"#
    );
}

#[test]
fn descriptions() {
    assert_eq!(
        render(
            &display_struct("Hello", fields! { world: "world" }).description("short"),
            80
        ),
        "Hello[short] { world: 'world' }"
    );
}

#[test]
fn annotations() {
    assert_eq!(
        render(
            &display_struct("Hello", fields! { world: "world" }).annotation("short"),
            80
        ),
        "Hello { world: 'world' } short"
    );

    assert_eq!(
        render(
            &display_struct("Hello", fields! { world: "world" }).annotation("short"),
            15
        ),
        lines(&["Hello {", "  world: 'world'", "} short"])
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
        display_struct("Point", fields! { x: self.x, y: self.y })
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
        display_struct(
            "Line",
            fields! { start: self.start.as_value(), end: self.end.as_value() },
        )
    }
}

struct Polygon {
    lines: Vec<Line>,
}

impl Inspect for Polygon {
    fn display(&self) -> Display<'_> {
        display_struct(
            "Polygon",
            fields! { lines: self.lines.iter().map(Inspect::as_value).collect::<Vec<_>>() },
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
fn nested_wraps_at_the_outer_levels() {
    assert_eq!(
        printer(80).print(&polygon()),
        lines(&[
            "Polygon {",
            "  lines: [",
            "    Line { start: Point { x: 1, y: 2 }, end: Point { x: 3, y: 4 } },",
            "    Line { start: Point { x: 5, y: 6 }, end: Point { x: 7, y: 8 } },",
            "    Line { start: Point { x: 9, y: 10 }, end: Point { x: 11, y: 12 } },",
            "    Line { start: Point { x: 11, y: 12 }, end: Point { x: 1, y: 2 } }",
            "  ]",
            "}",
        ])
    );
}

#[test]
fn nested_wraps_all_the_way_down_when_narrow() {
    assert_eq!(
        printer(50).print(&polygon()),
        lines(&[
            "Polygon {",
            "  lines: [",
            "    Line {",
            "      start: Point { x: 1, y: 2 },",
            "      end: Point { x: 3, y: 4 }",
            "    },",
            "    Line {",
            "      start: Point { x: 5, y: 6 },",
            "      end: Point { x: 7, y: 8 }",
            "    },",
            "    Line {",
            "      start: Point { x: 9, y: 10 },",
            "      end: Point { x: 11, y: 12 }",
            "    },",
            "    Line {",
            "      start: Point { x: 11, y: 12 },",
            "      end: Point { x: 1, y: 2 }",
            "    }",
            "  ]",
            "}",
        ])
    );
}
