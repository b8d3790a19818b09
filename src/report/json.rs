use crate::report::chart::{self, ChartPoint};
use crate::types::report::SimReport;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a SimReport,
    radar: Vec<ChartPoint>,
    bars: Vec<ChartPoint>,
}

pub fn to_json(report: &SimReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        report,
        radar: chart::radar_series(&report.values),
        bars: chart::bar_rows(&report.values),
    })
}
