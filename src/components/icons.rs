use dioxus::prelude::*;

/// One primitive of a 24x24 stroke icon.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Path(&'static str),
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, rx: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Moon,
    Sun,
    FileText,
    Github,
    Copy,
    Check,
    DollarSign,
    Globe,
    Code,
    Lock,
    Zap,
    Wrench,
    ShieldCheck,
}

impl IconKind {
    fn shapes(self) -> &'static [Shape] {
        match self {
            IconKind::Moon => &[Shape::Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
            IconKind::Sun =>
                &[
                    Shape::Circle { cx: 12.0, cy: 12.0, r: 4.0 },
                    Shape::Path("M12 2v2"),
                    Shape::Path("M12 20v2"),
                    Shape::Path("m4.93 4.93 1.41 1.41"),
                    Shape::Path("m17.66 17.66 1.41 1.41"),
                    Shape::Path("M2 12h2"),
                    Shape::Path("M20 12h2"),
                    Shape::Path("m6.34 17.66-1.41 1.41"),
                    Shape::Path("m19.07 4.93-1.41 1.41"),
                ],
            IconKind::FileText =>
                &[
                    Shape::Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
                    Shape::Path("M14 2v4a2 2 0 0 0 2 2h4"),
                    Shape::Path("M10 9H8"),
                    Shape::Path("M16 13H8"),
                    Shape::Path("M16 17H8"),
                ],
            IconKind::Github =>
                &[
                    Shape::Path(
                        "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"
                    ),
                    Shape::Path("M9 18c-4.51 2-5-2-7-2"),
                ],
            IconKind::Copy =>
                &[
                    Shape::Rect { x: 8.0, y: 8.0, width: 14.0, height: 14.0, rx: 2.0 },
                    Shape::Path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"),
                ],
            IconKind::Check => &[Shape::Path("M20 6 9 17l-5-5")],
            IconKind::DollarSign =>
                &[
                    Shape::Line { x1: 12.0, y1: 2.0, x2: 12.0, y2: 22.0 },
                    Shape::Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
                ],
            IconKind::Globe =>
                &[
                    Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                    Shape::Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                    Shape::Path("M2 12h20"),
                ],
            IconKind::Code =>
                &[
                    Shape::Path("m18 16 4-4-4-4"),
                    Shape::Path("m6 8-4 4 4 4"),
                    Shape::Path("m14.5 4-5 16"),
                ],
            IconKind::Lock =>
                &[
                    Shape::Rect { x: 3.0, y: 11.0, width: 18.0, height: 11.0, rx: 2.0 },
                    Shape::Path("M7 11V7a5 5 0 0 1 10 0v4"),
                ],
            IconKind::Zap =>
                &[
                    Shape::Path(
                        "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"
                    ),
                ],
            IconKind::Wrench =>
                &[
                    Shape::Path(
                        "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"
                    ),
                ],
            IconKind::ShieldCheck =>
                &[
                    Shape::Path(
                        "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"
                    ),
                    Shape::Path("m9 12 2 2 4-4"),
                ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = "icon")] class: &'static str,
    test_id: Option<&'static str>
) -> Element {
    let shapes = kind.shapes().iter().map(|shape| {
        match *shape {
            Shape::Path(d) => rsx!(path { d }),
            Shape::Circle { cx, cy, r } => rsx!(circle { cx, cy, r }),
            Shape::Rect { x, y, width, height, rx } => rsx!(rect { x, y, width, height, rx }),
            Shape::Line { x1, y1, x2, y2 } => rsx!(line { x1, y1, x2, y2 }),
        }
    });

    rsx! {
        svg {
            class,
            "data-testid": test_id,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shapes}
        }
    }
}
