use crate::report::chart;
use crate::types::report::SimReport;

pub fn to_markdown(report: &SimReport) -> String {
    let mut output = String::new();
    output.push_str("# Medicare STAR Rating Simulator\n\n");
    output.push_str(&format!(
        "**Projected STAR Rating:** {:.2}\n\n",
        report.score
    ));

    output.push_str("## KPI Values\n");
    let mut domain: Option<&str> = None;
    let mut subgroup: Option<&str> = None;
    for point in &report.values {
        if domain != Some(point.domain.as_str()) {
            output.push_str(&format!("\n### {}\n", point.domain));
            domain = Some(point.domain.as_str());
            subgroup = None;
        }
        if subgroup != Some(point.subgroup.as_str()) {
            output.push_str(&format!("\n**{}**\n\n", point.subgroup));
            subgroup = Some(point.subgroup.as_str());
        }
        output.push_str(&format!("- {}: {:.1}\n", point.metric, point.value));
    }
    output.push('\n');

    output.push_str("## KPI Impact (Bar)\n\n```\n");
    output.push_str(&chart::render_bars(
        &chart::bar_rows(&report.values),
        chart::DEFAULT_BAR_WIDTH,
    ));
    output.push_str("```\n\n");

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &report.recommendations {
            output.push_str(&format!("- {}\n", recommendation.line()));
        }
    }

    output
}
