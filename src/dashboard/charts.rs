//! Chart generation and rendering for the dashboard.
//!
//! Charts are built with charming as ECharts JSON options and initialised by
//! a script added to the page head.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, bar},
};
use maud::PreEscaped;

use crate::{dashboard::aggregation::net_worth_series, html::HeadElement, net_worth::NetWorth};

/// The ECharts build loaded by pages that show charts.
pub(super) const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Script that draws each chart into its container once the page has loaded.
///
/// Charts follow the system dark mode setting and resize with the window.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let init_calls: String = charts
        .iter()
        .map(|chart| format!("initChart(\"{}\", {});\n", chart.id, chart.options))
        .collect();

    HeadElement::ScriptSource(PreEscaped(format!(
        r#"function initChart(id, option) {{
    const chart = echarts.init(document.getElementById(id));
    chart.setOption(option);
    window.addEventListener("resize", () => chart.resize());

    const darkMode = window.matchMedia("(prefers-color-scheme: dark)");
    const applyTheme = () => chart.setTheme(darkMode.matches ? "dark" : "default");
    darkMode.addEventListener("change", applyTheme);
    applyTheme();
}}

document.addEventListener("DOMContentLoaded", () => {{
{init_calls}}});"#
    )))
}

/// Net worth over time with assets stacked above zero and liabilities below.
pub(super) fn net_worth_chart(history: &[NetWorth]) -> Chart {
    let (labels, assets, liabilities, net_worth) = net_worth_series(history);

    Chart::new()
        .title(Title::new().text("Net Worth").subtext("All snapshots"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(70)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Assets").stack("Totals").data(assets))
        .series(
            bar::Bar::new()
                .name("Liabilities")
                .stack("Totals")
                .data(liabilities),
        )
        .series(Line::new().name("Net Worth").data(net_worth))
}

fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "value",
        "return value == null ? \"-\" : value.toLocaleString(\"en-US\", { style: \"currency\", currency: \"USD\" });",
    )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
