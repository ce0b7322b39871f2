
use crate::aggregate::{FrequencyTable, Timeline};
use crate::ingest::IngestStats;
use crate::pipeline::AnalysisReport;

const MAX_KEY_WIDTH: usize = 48;
const BAR_WIDTH: f64 = 20.0;

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let agg = &report.aggregates;

    out.push_str(
        "Web Log Analysis\n\
         ================\n",
    );
    push_input(&mut out, "access", &report.access);
    push_input(&mut out, "error", &report.error);
    out.push('\n');

    push_table(&mut out, "Top pages", &agg.pages);
    push_table(&mut out, "Top clients", &agg.clients);
    push_table(&mut out, "Browsers", &agg.browsers);
    push_table(&mut out, "Status codes", &agg.status_codes);
    if !agg.devices.is_empty() {
        push_table(&mut out, "Devices", &agg.devices);
    }
    push_table(&mut out, "Error levels", &agg.error_levels);

    push_timeline(&mut out, "Requests per hour", &agg.requests_per_hour);
    push_timeline(&mut out, "Errors per hour", &agg.errors_per_hour);

    out
}

fn push_input(out: &mut String, label: &str, stats: &IngestStats) {
    out.push_str(&format!(
        "{:<6} lines: {} | records: {} | skipped: {} | unparsed timestamps: {}\n",
        label, stats.lines_read, stats.records_built, stats.lines_skipped, stats.timestamps_unparsed
    ));
}

fn push_table(out: &mut String, title: &str, table: &FrequencyTable) {
    out.push_str(&format!(
        "{title} ({} total, {} distinct):\n",
        table.total, table.distinct
    ));

    if table.is_empty() {
        out.push_str("  <no samples>\n\n");
        return;
    }

    let width = key_width(table.entries().iter().map(|e| e.key.as_str()));
    for entry in table.entries() {
        let pct = (entry.count as f64 / table.total as f64) * 100.0;
        out.push_str(&format!(
            "  {:<width$} {:<20} {:>7} {:>5.1}%\n",
            truncate(&entry.key),
            bar(pct),
            entry.count,
            pct,
        ));
    }
    out.push('\n');
}

fn push_timeline(out: &mut String, title: &str, timeline: &Timeline) {
    out.push_str(&format!("{title}:\n"));

    if timeline.is_empty() {
        out.push_str("  <no samples>\n\n");
        return;
    }

    let peak = timeline.points().iter().map(|p| p.count).max().unwrap_or(1);
    for point in timeline.points() {
        let pct = (point.count as f64 / peak as f64) * 100.0;
        out.push_str(&format!(
            "  {}  {:<20} {:>7}\n",
            point.hour.start().to_rfc3339(),
            bar(pct),
            point.count
        ));
    }
    out.push('\n');
}

fn bar(pct: f64) -> String {
    let bars = ((pct / 100.0 * BAR_WIDTH).floor() as usize).max(1);
    "█".repeat(bars)
}

fn key_width<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.map(|k| k.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_KEY_WIDTH)
}

fn truncate(key: &str) -> String {
    if key.chars().count() <= MAX_KEY_WIDTH {
        return key.to_string();
    }
    let mut s: String = key.chars().take(MAX_KEY_WIDTH - 1).collect();
    s.push('…');
    s
}
