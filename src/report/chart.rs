use crate::types::report::MetricPoint;
use crate::values::MAX_METRIC_VALUE;
use serde::Serialize;

pub const DEFAULT_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

fn to_chart_point(point: &MetricPoint) -> ChartPoint {
    ChartPoint {
        label: point.metric.clone(),
        value: point.value,
    }
}

/// One row per metric, in catalog order.
pub fn bar_rows(points: &[MetricPoint]) -> Vec<ChartPoint> {
    points.iter().map(to_chart_point).collect()
}

/// Radar polygon; the first vertex is repeated to close the outline.
pub fn radar_series(points: &[MetricPoint]) -> Vec<ChartPoint> {
    let mut series = bar_rows(points);
    if let Some(first) = series.first().cloned() {
        series.push(first);
    }
    series
}

/// Horizontal text bars scaled so that a value of 5.0 fills `width` cells.
pub fn render_bars(rows: &[ChartPoint], width: usize) -> String {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        let fraction = (row.value / MAX_METRIC_VALUE).clamp(0.0, 1.0);
        let cells = (fraction * width as f64).round() as usize;
        output.push_str(&format!(
            "{:<label_width$} | {}{} {:.1}\n",
            row.label,
            "#".repeat(cells),
            " ".repeat(width.saturating_sub(cells)),
            row.value,
        ));
    }
    output
}
