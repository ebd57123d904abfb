// src/export.rs
//
// Export surfaces for a normalized chart: JSON, CSV and plain text, plus the
// share-sheet summary line and the fire-and-forget persistence seam. The
// actual download/clipboard/share plumbing belongs to the embedding platform;
// this module only produces the bytes and the filename.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }
}

/// Pretty-printed JSON of the whole chart.
pub fn to_json(chart: &Chart) -> Result<String, ChartError> {
    Ok(serde_json::to_string_pretty(chart)?)
}

/// CSV of the planet table: `Planet,Sign,House,Degree` header, one quoted row
/// per planet.
pub fn to_csv(chart: &Chart) -> String {
    let mut out = String::from("Planet,Sign,House,Degree\n");
    for planet in &chart.planets {
        out.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",\"{:.2}\"\n",
            planet.name, planet.sign, planet.house, planet.degree
        ));
    }
    out
}

/// Human-readable text dump: PLANETS, HOUSES and ASPECTS sections, one line
/// per entry.
pub fn to_text(chart: &Chart) -> String {
    let mut out = String::from("PLANETS\n");
    for planet in &chart.planets {
        let retro = if planet.retrograde { " (R)" } else { "" };
        out.push_str(&format!(
            "{}: {:.2}° {}, house {}{}\n",
            planet.name, planet.degree, planet.sign, planet.house, retro
        ));
    }
    out.push_str("\nHOUSES\n");
    for house in &chart.houses {
        out.push_str(&format!(
            "House {}: {} {:.2}° (ruler {})\n",
            house.number, house.sign, house.degree, house.ruler
        ));
    }
    out.push_str("\nASPECTS\n");
    for aspect in &chart.aspects {
        out.push_str(&format!(
            "{} {} {} (orb {:.2}°, {})\n",
            aspect.planet1, aspect.kind, aspect.planet2, aspect.orb, aspect.applying
        ));
    }
    out
}

/// Download filename for an export: `natal-chart-<ISO-date>.<ext>`.
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("natal-chart-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Short text for the native share sheet: `"Sun in {sign}, Moon in {sign}"`.
/// A missing luminary drops out of the line; a chart with neither falls back
/// to a generic label.
pub fn share_summary(chart: &Chart) -> String {
    let luminary = |name: &str| {
        chart
            .planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| format!("{} in {}", p.name, p.sign))
    };
    let parts: Vec<String> = [luminary("Sun"), luminary("Moon")]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        "Natal chart".to_string()
    } else {
        parts.join(", ")
    }
}

/// Seam to the opaque persistence collaborator. Saving is best-effort from
/// the caller's point of view: failures are logged and swallowed, never
/// surfaced as a blocking error.
pub trait ChartSink {
    fn save(&self, chart: &Chart) -> Result<(), ChartError>;
}

pub fn save_best_effort(sink: &dyn ChartSink, chart: &Chart) {
    if let Err(err) = sink.save(chart) {
        warn!("chart save skipped: {}", err);
    }
}
