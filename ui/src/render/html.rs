//! Standalone HTML export with an embedded Chart.js radar chart.
//!
//! Every value the chart needs is inlined as a literal, so the exported
//! file keeps working after the editor is closed.

use std::fmt::Write;

use crate::core::color::{alpha_hex, with_alpha, ALPHA_GRID, ALPHA_MUTED, ALPHA_SPOKE, ALPHA_TINT};
use crate::core::format::format_number;
use crate::core::state::ScorecardState;

use super::escape_markup;

/// Pinned charting library loaded by the exported document.
pub const CHART_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/Chart.js/3.9.1/chart.min.js";
const FONT_CSS_URL: &str = "https://fonts.googleapis.com/css2";
const FONT_WEIGHTS: &str = "300;400;500;600;700;800;900";
/// Viewport width below which the card tightens up.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
/// Delays for the readyState / DOMContentLoaded / load initialization attempts.
const INIT_DELAYS_MS: [u32; 3] = [100, 200, 300];
pub(crate) const DOCUMENT_TITLE_PREFIX: &str = "GoodHelpAI Agent Evaluation";
/// Dataset name shown by chart legends.
pub(crate) const LEGEND_LABEL: &str = "Agent Score";

pub fn render_html(state: &ScorecardState) -> String {
    let mut html = String::with_capacity(12 * 1024);
    // Writing into a String cannot fail.
    let _ = write_document(&mut html, state);
    html
}

fn write_document(out: &mut String, state: &ScorecardState) -> std::fmt::Result {
    let title = escape_markup(&state.data.title);
    let font = state.style.font_family;

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"    <meta charset="UTF-8">"#)?;
    writeln!(
        out,
        r#"    <meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(out, "    <title>{DOCUMENT_TITLE_PREFIX} - {title}</title>")?;
    writeln!(
        out,
        r#"    <link href="{FONT_CSS_URL}?family={}:wght@{FONT_WEIGHTS}&display=swap" rel="stylesheet">"#,
        font.css_query_name()
    )?;
    write_styles(out, state)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    write_body(out, state, &title)?;
    writeln!(out, r#"    <script src="{CHART_JS_URL}"></script>"#)?;
    write_script(out, state)?;
    writeln!(out, "</body>")?;
    write!(out, "</html>")
}

fn write_styles(out: &mut String, state: &ScorecardState) -> std::fmt::Result {
    let style = &state.style;
    let primary = &style.primary_color;
    let secondary = &style.secondary_color;
    let text = &style.text_color;

    writeln!(out, "    <style>")?;
    writeln!(out, "        * {{ margin: 0; padding: 0; box-sizing: border-box; }}")?;
    writeln!(
        out,
        "        body {{ font-family: '{}', sans-serif; background: transparent; color: {text}; line-height: 1.6; margin: 0; padding: 0; font-size: {}px; }}",
        style.font_family, style.font_size
    )?;
    writeln!(
        out,
        "        .goodhelp-container {{ width: 100%; max-width: {}px; margin: 0 auto; padding: 1rem; }}",
        style.card_width
    )?;
    writeln!(
        out,
        "        .agent-card {{ background: {}; border-radius: {}px; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06); border: 1px solid rgba(46, 46, 50, 0.08); padding: 2rem; height: {}px; display: flex; flex-direction: column; transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); overflow: hidden; }}",
        style.background_color, style.border_radius, style.card_height
    )?;
    writeln!(
        out,
        "        .agent-card:hover {{ transform: translateY(-2px); box-shadow: 0 10px 25px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05); }}"
    )?;
    writeln!(
        out,
        "        .card-header {{ display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 1.75rem; gap: 1rem; }}"
    )?;
    writeln!(
        out,
        "        .status-badge {{ background: linear-gradient(135deg, {primary}, {secondary}); color: {}; font-size: 0.875rem; font-weight: 700; padding: 0.5rem 1rem; border-radius: {}px; text-transform: uppercase; letter-spacing: 0.025em; white-space: nowrap; box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06); }}",
        style.background_color,
        style.badge_radius()
    )?;
    writeln!(
        out,
        "        .agent-title {{ font-size: 1.5rem; font-weight: 700; color: {text}; line-height: 1.3; margin: 0; }}"
    )?;
    writeln!(
        out,
        "        .chart-section {{ flex-grow: 1; position: relative; min-height: 0; margin-bottom: 1.5rem; }}"
    )?;
    writeln!(
        out,
        "        .chart-container {{ position: relative; height: 100%; width: 100%; }}"
    )?;
    writeln!(
        out,
        "        .metrics-footer {{ background: linear-gradient(135deg, {}, {}); border-radius: {}px; padding: 1.5rem; text-align: center; border: 1px solid {}; }}",
        with_alpha(primary, ALPHA_TINT),
        with_alpha(secondary, ALPHA_TINT),
        style.footer_radius(),
        with_alpha(primary, ALPHA_GRID)
    )?;
    writeln!(
        out,
        "        .metric-label {{ font-size: 0.875rem; font-weight: 500; color: {}; text-transform: uppercase; letter-spacing: 0.025em; margin-bottom: 0.5rem; }}",
        with_alpha(text, ALPHA_MUTED)
    )?;
    writeln!(
        out,
        "        .metric-value {{ font-size: 2rem; font-weight: 800; background: linear-gradient(135deg, {primary}, {secondary}); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; line-height: 1.2; }}"
    )?;
    writeln!(out, "        @media (max-width: {MOBILE_BREAKPOINT_PX}px) {{")?;
    writeln!(
        out,
        "            .goodhelp-container {{ max-width: 100%; padding: 0.75rem; }}"
    )?;
    writeln!(out, "            .agent-card {{ padding: 1.5rem; }}")?;
    writeln!(out, "            .agent-title {{ font-size: 1.25rem; }}")?;
    writeln!(out, "            .metric-value {{ font-size: 1.75rem; }}")?;
    writeln!(
        out,
        "            .status-badge {{ font-size: 0.75rem; padding: 0.375rem 0.75rem; }}"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    </style>")
}

fn write_body(out: &mut String, state: &ScorecardState, title: &str) -> std::fmt::Result {
    let data = &state.data;
    writeln!(out, r#"    <div class="goodhelp-container">"#)?;
    writeln!(out, r#"        <div class="agent-card">"#)?;
    writeln!(out, r#"            <header class="card-header">"#)?;
    writeln!(
        out,
        r#"                <div><h3 class="agent-title">{title}</h3></div>"#
    )?;
    writeln!(
        out,
        r#"                <div class="status-badge">{}</div>"#,
        data.status()
    )?;
    writeln!(out, "            </header>")?;
    writeln!(out, r#"            <section class="chart-section">"#)?;
    writeln!(out, r#"                <div class="chart-container">"#)?;
    writeln!(
        out,
        r#"                    <canvas id="radarChart" width="400" height="400"></canvas>"#
    )?;
    writeln!(out, "                </div>")?;
    writeln!(out, "            </section>")?;
    writeln!(out, r#"            <footer class="metrics-footer">"#)?;
    writeln!(
        out,
        r#"                <div class="metric-label">{}</div>"#,
        data.key_metric_label()
    )?;
    writeln!(
        out,
        r#"                <div class="metric-value">{}</div>"#,
        escape_markup(&data.key_metric())
    )?;
    writeln!(out, "            </footer>")?;
    writeln!(out, "        </div>")?;
    writeln!(out, "    </div>")
}

fn write_script(out: &mut String, state: &ScorecardState) -> std::fmt::Result {
    let data = &state.data;
    let style = &state.style;
    let chart = &state.chart;
    let primary = &style.primary_color;
    let text = &style.text_color;

    let scores = data
        .scores()
        .iter()
        .map(|score| score.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let fill = with_alpha(primary, &alpha_hex(chart.fill_opacity));
    let [ready_delay, dom_delay, load_delay] = INIT_DELAYS_MS;

    writeln!(out, "    <script>")?;
    writeln!(out, "        (function() {{")?;
    writeln!(out, "            const agentData = {{")?;
    writeln!(out, "                scores: [{scores}],")?;
    writeln!(out, "                labels: {}", script_safe_json(&data.custom_labels))?;
    writeln!(out, "            }};")?;
    writeln!(out)?;
    writeln!(out, "            function initializeChart() {{")?;
    writeln!(out, "                try {{")?;
    writeln!(
        out,
        "                    const canvas = document.getElementById('radarChart');"
    )?;
    writeln!(
        out,
        "                    if (!canvas || typeof Chart === 'undefined') return;"
    )?;
    writeln!(out, "                    const existing = Chart.getChart(canvas);")?;
    writeln!(out, "                    if (existing) existing.destroy();")?;
    writeln!(out)?;
    writeln!(out, "                    new Chart(canvas.getContext('2d'), {{")?;
    writeln!(out, "                        type: 'radar',")?;
    writeln!(out, "                        data: {{")?;
    writeln!(out, "                            labels: agentData.labels,")?;
    writeln!(out, "                            datasets: [{{")?;
    writeln!(out, "                                label: '{LEGEND_LABEL}',")?;
    writeln!(out, "                                data: agentData.scores,")?;
    writeln!(out, "                                backgroundColor: '{fill}',")?;
    writeln!(out, "                                borderColor: '{primary}',")?;
    writeln!(
        out,
        "                                borderWidth: {},",
        format_number(chart.border_width)
    )?;
    writeln!(out, "                                pointBackgroundColor: '{primary}',")?;
    writeln!(
        out,
        "                                pointBorderColor: '{}',",
        style.background_color
    )?;
    writeln!(out, "                                pointBorderWidth: 2,")?;
    writeln!(
        out,
        "                                pointRadius: {}",
        chart.point_radius
    )?;
    writeln!(out, "                            }}]")?;
    writeln!(out, "                        }},")?;
    writeln!(out, "                        options: {{")?;
    writeln!(out, "                            responsive: true,")?;
    writeln!(out, "                            maintainAspectRatio: false,")?;
    writeln!(
        out,
        "                            animation: {{ duration: {} }},",
        chart.animation_duration
    )?;
    writeln!(out, "                            plugins: {{")?;
    writeln!(
        out,
        "                                legend: {{ display: {} }},",
        chart.show_legend
    )?;
    writeln!(out, "                                tooltip: {{")?;
    writeln!(
        out,
        "                                    backgroundColor: 'rgba(255, 255, 255, 0.95)',"
    )?;
    writeln!(out, "                                    borderColor: '{primary}',")?;
    writeln!(out, "                                    borderWidth: 1,")?;
    writeln!(out, "                                    titleColor: '{text}',")?;
    writeln!(out, "                                    bodyColor: '{text}',")?;
    writeln!(
        out,
        "                                    callbacks: {{ label: ctx => 'Score: ' + ctx.raw + '/5' }}"
    )?;
    writeln!(out, "                                }}")?;
    writeln!(out, "                            }},")?;
    writeln!(out, "                            scales: {{")?;
    writeln!(out, "                                r: {{")?;
    writeln!(
        out,
        "                                    beginAtZero: true, min: 0, max: 5,"
    )?;
    writeln!(out, "                                    angleLines: {{")?;
    writeln!(
        out,
        "                                        display: {},",
        chart.show_grid
    )?;
    writeln!(
        out,
        "                                        color: '{}'",
        with_alpha(text, ALPHA_SPOKE)
    )?;
    writeln!(out, "                                    }},")?;
    writeln!(out, "                                    grid: {{")?;
    writeln!(
        out,
        "                                        display: {},",
        chart.show_grid
    )?;
    writeln!(
        out,
        "                                        color: '{}'",
        with_alpha(text, ALPHA_GRID)
    )?;
    writeln!(out, "                                    }},")?;
    writeln!(out, "                                    pointLabels: {{")?;
    writeln!(
        out,
        "                                        display: {},",
        chart.show_labels
    )?;
    writeln!(out, "                                        font: {{")?;
    writeln!(
        out,
        "                                            family: '{}',",
        style.font_family
    )?;
    writeln!(
        out,
        "                                            size: {},",
        style.point_label_size()
    )?;
    writeln!(out, "                                            weight: '600'")?;
    writeln!(out, "                                        }},")?;
    writeln!(out, "                                        color: '{text}'")?;
    writeln!(out, "                                    }},")?;
    writeln!(out, "                                    ticks: {{ display: false }}")?;
    writeln!(out, "                                }}")?;
    writeln!(out, "                            }}")?;
    writeln!(out, "                        }}")?;
    writeln!(out, "                    }});")?;
    writeln!(out, "                }} catch (error) {{")?;
    writeln!(
        out,
        "                    console.error('Chart initialization failed:', error);"
    )?;
    writeln!(out, "                }}")?;
    writeln!(out, "            }}")?;
    writeln!(out)?;
    writeln!(
        out,
        "            if (document.readyState === 'complete') setTimeout(initializeChart, {ready_delay});"
    )?;
    writeln!(
        out,
        "            document.addEventListener('DOMContentLoaded', () => setTimeout(initializeChart, {dom_delay}));"
    )?;
    writeln!(
        out,
        "            window.addEventListener('load', () => setTimeout(initializeChart, {load_delay}));"
    )?;
    writeln!(out, "        }})();")?;
    writeln!(out, "    </script>")
}

/// JSON for the axis labels, safe to embed inside a `<script>` element.
fn script_safe_json(labels: &[String]) -> String {
    serde_json::to_string(labels)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}
