use dioxus::prelude::*;

const VIEW_WIDTH: f64 = 640.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_LEFT: f64 = 64.0;
const TICK_STEP: f64 = 20.0;
const BAND_PADDING: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    /// CSS colour, e.g. `hsl(var(--primary))`.
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
    pub y_label: &'static str,
    pub height: f64,
    /// Space under the plot for the rotated category labels.
    pub label_space: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryLabel {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Everything the SVG needs, in view-box coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub axis_max: f64,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarRect>,
    pub labels: Vec<CategoryLabel>,
}

/// Smallest multiple of the tick step that is >= `max`, at least one step.
pub fn axis_max(max: f64) -> f64 {
    let steps = (max / TICK_STEP).ceil().max(1.0);
    steps * TICK_STEP
}

impl ChartSpec {
    pub fn layout(&self) -> ChartLayout {
        let plot_left = MARGIN_LEFT;
        let plot_right = VIEW_WIDTH - MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = self.height - self.label_space;
        let plot_height = plot_bottom - plot_top;

        let max_value = self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max);
        let axis_max = axis_max(max_value);
        let scale = |value: f64| (value.max(0.0) / axis_max) * plot_height;

        let tick_count = (axis_max / TICK_STEP).round() as usize;
        let ticks = (0..=tick_count)
            .map(|i| {
                let value = (i as f64) * TICK_STEP;
                Tick { value, y: plot_bottom - scale(value) }
            })
            .collect();

        let band = if self.categories.is_empty() {
            0.0
        } else {
            (plot_right - plot_left) / (self.categories.len() as f64)
        };
        let inner = band * (1.0 - 2.0 * BAND_PADDING);
        let bar_width = if self.series.is_empty() { 0.0 } else { inner / (self.series.len() as f64) };

        let mut bars = Vec::new();
        let mut labels = Vec::new();
        for (i, category) in self.categories.iter().enumerate() {
            let band_start = plot_left + (i as f64) * band;
            for (s, series) in self.series.iter().enumerate() {
                let Some(&value) = series.values.get(i) else {
                    continue;
                };
                let height = scale(value);
                bars.push(BarRect {
                    x: band_start + band * BAND_PADDING + (s as f64) * bar_width,
                    y: plot_bottom - height,
                    width: bar_width,
                    height,
                    color: series.color,
                    tooltip: format!("{} · {}: {:.1}", category, series.name, value),
                });
            }
            labels.push(CategoryLabel {
                text: category,
                x: band_start + band / 2.0,
                y: plot_bottom + 12.0,
            });
        }

        ChartLayout {
            width: VIEW_WIDTH,
            height: self.height,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            axis_max,
            ticks,
            bars,
            labels,
        }
    }
}

#[component]
pub fn BarChart(spec: ChartSpec, test_id: &'static str) -> Element {
    let layout = spec.layout();
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let y_label_x = 16.0;
    let y_label_y = (layout.plot_top + layout.plot_bottom) / 2.0;

    rsx! {
        div { class: "chart", "data-testid": test_id,
            svg {
                class: "chart-svg",
                view_box,
                "role": "img",
                "aria-label": spec.y_label,
                for tick in layout.ticks.iter() {
                    line {
                        class: "chart-grid",
                        x1: layout.plot_left,
                        x2: layout.plot_right,
                        y1: tick.y,
                        y2: tick.y,
                    }
                    text {
                        class: "chart-tick",
                        x: layout.plot_left - 8.0,
                        y: tick.y + 4.0,
                        text_anchor: "end",
                        "{tick.value}"
                    }
                }
                text {
                    class: "chart-axis-label",
                    x: y_label_x,
                    y: y_label_y,
                    text_anchor: "middle",
                    transform: format!("rotate(-90 {} {})", y_label_x, y_label_y),
                    "{spec.y_label}"
                }
                for bar in layout.bars.iter() {
                    rect {
                        class: "chart-bar",
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                        rx: 4.0,
                        style: format!("fill: {}", bar.color),
                        title { "{bar.tooltip}" }
                    }
                }
                for label in layout.labels.iter() {
                    text {
                        class: "chart-category",
                        x: label.x,
                        y: label.y,
                        text_anchor: "end",
                        transform: format!("rotate(-40 {} {})", label.x, label.y),
                        "{label.text}"
                    }
                }
            }
            if spec.series.len() > 1 {
                div { class: "chart-legend",
                    for series in spec.series.iter() {
                        span { class: "chart-legend-item",
                            span {
                                class: "chart-legend-swatch",
                                style: format!("background: {}", series.color),
                            }
                            "{series.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(values: Vec<f64>) -> ChartSpec {
        ChartSpec {
            categories: vec!["a", "b", "c"],
            series: vec![Series { name: "ToolFit", color: "red", values }],
            y_label: "Accuracy (%)",
            height: 350.0,
            label_space: 90.0,
        }
    }

    #[test]
    fn test_axis_max_rounds_up_to_tick_step() {
        assert_eq!(axis_max(88.5), 100.0);
        assert_eq!(axis_max(60.0), 60.0);
        assert_eq!(axis_max(61.5), 80.0);
        assert_eq!(axis_max(0.0), 20.0);
    }

    #[test]
    fn test_bars_sit_on_the_baseline() {
        let layout = single(vec![16.0, 50.0, 100.0]).layout();
        assert_eq!(layout.bars.len(), 3);
        for bar in &layout.bars {
            assert!((bar.y + bar.height - layout.plot_bottom).abs() < 1e-9);
        }
        let full = &layout.bars[2];
        assert!((full.y - layout.plot_top).abs() < 1e-9);
    }

    #[test]
    fn test_grouped_bars_share_the_band() {
        let spec = ChartSpec {
            categories: vec!["m1", "m2"],
            series: vec![
                Series { name: "x", color: "red", values: vec![10.0, 20.0] },
                Series { name: "y", color: "blue", values: vec![30.0, 40.0] }
            ],
            y_label: "Accuracy (%)",
            height: 400.0,
            label_space: 90.0,
        };
        let layout = spec.layout();
        assert_eq!(layout.bars.len(), 4);
        // second series sits directly right of the first within a band
        assert!((layout.bars[1].x - (layout.bars[0].x + layout.bars[0].width)).abs() < 1e-9);
        assert!(layout.bars[2].x > layout.bars[1].x + layout.bars[1].width);
    }
}
