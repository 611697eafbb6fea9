use super::legend::ChartLegend;
use super::scale::{ticks, zero_based_domain, LinearScale};
use crate::shared::number_format::format_tick;
use contracts::dashboards::d400_regional_sales::{BarChart, LegendEntry};
use leptos::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 44.0;
const TICK_TARGET: usize = 5;
/// Share of a category band covered by its bar
const BAR_FILL: f64 = 0.6;
/// Annotation font size in a segment tall enough for it
const LABEL_FONT_SIZE: f64 = 12.0;
/// Thin segments shrink their annotation down to this size
const MIN_LABEL_FONT_SIZE: f64 = 7.0;

/// One stacked rectangle in pixel space
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub label: String,
    pub label_font_size: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub rects: Vec<BarRect>,
    /// (pixel y, label)
    pub y_ticks: Vec<(f64, String)>,
    /// (pixel x of band centre, label)
    pub x_labels: Vec<(f64, String)>,
}

/// Pixel geometry of a stacked bar chart
pub fn layout(chart: &BarChart) -> BarLayout {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;

    let max_total = chart
        .categories
        .iter()
        .map(|c| c.total)
        .fold(0.0_f64, f64::max);
    let domain = zero_based_domain(max_total, TICK_TARGET);
    let y = LinearScale::new(domain, (plot_bottom, MARGIN_TOP));

    let band = if chart.categories.is_empty() {
        plot_width
    } else {
        plot_width / chart.categories.len() as f64
    };
    let bar_width = band * BAR_FILL;

    let mut rects = Vec::new();
    let mut x_labels = Vec::new();

    for (i, category) in chart.categories.iter().enumerate() {
        let centre = MARGIN_LEFT + band * (i as f64 + 0.5);
        x_labels.push((centre, category.region.display_name().to_string()));

        let mut base = 0.0;
        for segment in &category.segments {
            let top = y.map(base + segment.value);
            let height = y.length(segment.value);
            rects.push(BarRect {
                x: centre - bar_width / 2.0,
                y: top,
                width: bar_width,
                height,
                color: category.color.clone(),
                label: segment.label.clone(),
                label_font_size: label_font_size(height),
                title: format!(
                    "{}={}\n{}={}",
                    chart.x_label, category.region, chart.y_label, segment.label
                ),
            });
            base += segment.value;
        }
    }

    let y_ticks = ticks(domain, TICK_TARGET)
        .into_iter()
        .map(|v| (y.map(v), format_tick(v)))
        .collect();

    BarLayout {
        rects,
        y_ticks,
        x_labels,
    }
}

/// Every segment is annotated; the text shrinks to fit thin segments
fn label_font_size(segment_height: f64) -> f64 {
    (segment_height * 0.8).clamp(MIN_LABEL_FONT_SIZE, LABEL_FONT_SIZE)
}

/// Stacked bar chart: one bar per region, one annotated segment per record
#[component]
pub fn BarChartView(chart: BarChart) -> impl IntoView {
    let geometry = layout(&chart);
    let legend: Vec<LegendEntry> = chart
        .categories
        .iter()
        .map(|c| LegendEntry {
            region: c.region,
            color: c.color.clone(),
        })
        .collect();
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;

    view! {
        <div class="chart">
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                preserveAspectRatio="xMidYMid meet"
            >
                {geometry.y_ticks.into_iter().map(|(ty, label)| view! {
                    <g class="chart__tick">
                        <line
                            x1=MARGIN_LEFT.to_string()
                            x2=(WIDTH - MARGIN_RIGHT).to_string()
                            y1=ty.to_string()
                            y2=ty.to_string()
                            class="chart__gridline"
                        />
                        <text
                            x=(MARGIN_LEFT - 6.0).to_string()
                            y=ty.to_string()
                            text-anchor="end"
                            dominant-baseline="middle"
                            class="chart__tick-label"
                        >
                            {label}
                        </text>
                    </g>
                }).collect_view()}

                {geometry.rects.into_iter().map(|rect| {
                    let label_x = rect.x + rect.width / 2.0;
                    let label_y = rect.y + rect.height / 2.0;
                    view! {
                        <g class="chart__bar">
                            <rect
                                x=rect.x.to_string()
                                y=rect.y.to_string()
                                width=rect.width.to_string()
                                height=rect.height.to_string()
                                fill=rect.color
                                stroke="#ffffff"
                                stroke-width="1"
                            >
                                <title>{rect.title}</title>
                            </rect>
                            <text
                                x=label_x.to_string()
                                y=label_y.to_string()
                                font-size=rect.label_font_size.to_string()
                                text-anchor="middle"
                                dominant-baseline="middle"
                                class="chart__bar-label"
                            >
                                {rect.label}
                            </text>
                        </g>
                    }
                }).collect_view()}

                <line
                    x1=MARGIN_LEFT.to_string()
                    x2=(WIDTH - MARGIN_RIGHT).to_string()
                    y1=plot_bottom.to_string()
                    y2=plot_bottom.to_string()
                    class="chart__axis"
                />
                {geometry.x_labels.into_iter().map(|(lx, label)| view! {
                    <text
                        x=lx.to_string()
                        y=(plot_bottom + 16.0).to_string()
                        text-anchor="middle"
                        class="chart__tick-label"
                    >
                        {label}
                    </text>
                }).collect_view()}
                <text
                    x=(MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0).to_string()
                    y=(HEIGHT - 6.0).to_string()
                    text-anchor="middle"
                    class="chart__axis-title"
                >
                    {chart.x_label.clone()}
                </text>
                <text
                    x="14"
                    y=(MARGIN_TOP + (plot_bottom - MARGIN_TOP) / 2.0).to_string()
                    text-anchor="middle"
                    transform=format!(
                        "rotate(-90 14 {})",
                        MARGIN_TOP + (plot_bottom - MARGIN_TOP) / 2.0
                    )
                    class="chart__axis-title"
                >
                    {chart.y_label.clone()}
                </text>
            </svg>
            <ChartLegend entries=legend />
        </div>
    }
}
