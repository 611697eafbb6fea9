use super::legend::ChartLegend;
use super::scale::{padded_domain, ticks, LinearScale};
use crate::shared::number_format::format_tick;
use contracts::dashboards::d400_regional_sales::ScatterChart;
use leptos::prelude::*;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 44.0;
const TICK_TARGET: usize = 5;
const DOMAIN_PADDING: f64 = 0.08;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterMarker {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub markers: Vec<ScatterMarker>,
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
}

/// Pixel geometry of the scatter plot; marker radius is half the
/// diameter carried by the view model
pub fn layout(chart: &ScatterChart) -> ScatterLayout {
    let (x_min, x_max) = min_max(chart.points.iter().map(|p| p.x));
    let (y_min, y_max) = min_max(chart.points.iter().map(|p| p.y));

    let x_domain = padded_domain(x_min, x_max, DOMAIN_PADDING, TICK_TARGET);
    let y_domain = padded_domain(y_min, y_max, DOMAIN_PADDING, TICK_TARGET);
    let x = LinearScale::new(x_domain, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT));
    let y = LinearScale::new(y_domain, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    let markers = chart
        .points
        .iter()
        .map(|p| ScatterMarker {
            cx: x.map(p.x),
            cy: y.map(p.y),
            r: p.size / 2.0,
            color: p.color.clone(),
            title: p.hover.clone(),
        })
        .collect();

    ScatterLayout {
        markers,
        x_ticks: ticks(x_domain, TICK_TARGET)
            .into_iter()
            .map(|v| (x.map(v), format_tick(v)))
            .collect(),
        y_ticks: ticks(y_domain, TICK_TARGET)
            .into_iter()
            .map(|v| (y.map(v), format_tick(v)))
            .collect(),
    }
}

/// No points: unit domain
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

/// Orders vs Sales, colored by region, hover shows the record
#[component]
pub fn ScatterChartView(chart: ScatterChart) -> impl IntoView {
    let geometry = layout(&chart);
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_middle = MARGIN_TOP + (plot_bottom - MARGIN_TOP) / 2.0;

    view! {
        <div class="chart chart--wide">
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

                {geometry.x_ticks.into_iter().map(|(tx, label)| view! {
                    <g class="chart__tick">
                        <line
                            x1=tx.to_string()
                            x2=tx.to_string()
                            y1=MARGIN_TOP.to_string()
                            y2=plot_bottom.to_string()
                            class="chart__gridline"
                        />
                        <text
                            x=tx.to_string()
                            y=(plot_bottom + 16.0).to_string()
                            text-anchor="middle"
                            class="chart__tick-label"
                        >
                            {label}
                        </text>
                    </g>
                }).collect_view()}

                {geometry.markers.into_iter().map(|m| view! {
                    <circle
                        cx=m.cx.to_string()
                        cy=m.cy.to_string()
                        r=m.r.to_string()
                        fill=m.color
                        fill-opacity="0.75"
                        stroke="#ffffff"
                        stroke-width="1"
                        class="chart__marker"
                    >
                        <title>{m.title}</title>
                    </circle>
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
                    y=plot_middle.to_string()
                    text-anchor="middle"
                    transform=format!("rotate(-90 14 {})", plot_middle)
                    class="chart__axis-title"
                >
                    {chart.y_label.clone()}
                </text>
            </svg>
            <ChartLegend entries=chart.legend.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_regional_sales::ScatterPoint;
    use contracts::enums::Region;

    fn point(x: f64, y: f64, size: f64) -> ScatterPoint {
        ScatterPoint {
            region: Region::North,
            color: "#636EFA".into(),
            x,
            y,
            size,
            hover: format!("Orders={}\nSales={}", x, y),
        }
    }

    fn chart(points: Vec<ScatterPoint>) -> ScatterChart {
        ScatterChart {
            title: "Sales vs Orders Relationship".into(),
            x_label: "Orders".into(),
            y_label: "Sales".into(),
            points,
            legend: Vec::new(),
        }
    }

    #[test]
    fn test_markers_stay_inside_plot() {
        let geometry = layout(&chart(vec![
            point(5.0, 100.0, 14.1),
            point(10.0, 200.0, 20.0),
        ]));
        for m in &geometry.markers {
            assert!(m.cx > MARGIN_LEFT && m.cx < WIDTH - MARGIN_RIGHT);
            assert!(m.cy > MARGIN_TOP && m.cy < HEIGHT - MARGIN_BOTTOM);
        }
        // higher sales are drawn higher up
        assert!(geometry.markers[1].cy < geometry.markers[0].cy);
        assert!(geometry.markers[1].cx > geometry.markers[0].cx);
        assert_eq!(geometry.markers[1].r, 10.0);
    }

    #[test]
    fn test_single_point() {
        let geometry = layout(&chart(vec![point(6.0, 120.0, 20.0)]));
        assert_eq!(geometry.markers.len(), 1);
        assert!(geometry.markers[0].cx.is_finite());
        assert!(geometry.markers[0].cy.is_finite());
    }

    #[test]
    fn test_no_points() {
        let geometry = layout(&chart(Vec::new()));
        assert!(geometry.markers.is_empty());
        assert!(!geometry.x_ticks.is_empty());
    }
}
