//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one value per line. Notices
//! go to stderr so stdout stays machine-readable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use armory_core::WeaponRecord;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

/// Determine whether color output should be enabled on `stream`.
pub fn should_color(mode: &ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views are not tables.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    plain_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => plain_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print a confirmation line to stderr, respecting quiet mode.
pub fn print_notice(message: &str, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    let mut stderr = io::stderr().lock();
    if should_color(&global.color, io::stderr().is_terminal()) {
        let _ = writeln!(stderr, "{} {message}", "✓".green().bold());
    } else {
        let _ = writeln!(stderr, "{message}");
    }
}

// ── Weapon rendering ─────────────────────────────────────────────────

#[derive(Tabled)]
struct WeaponRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Manufacturer")]
    manufacturer: String,
    #[tabled(rename = "Caliber")]
    caliber: String,
    #[tabled(rename = "Magazine")]
    magazine_capacity: u32,
    #[tabled(rename = "Fire Rate")]
    fire_rate: u32,
    #[tabled(rename = "Ammo")]
    ammo_count: u32,
}

impl From<&WeaponRecord> for WeaponRow {
    fn from(w: &WeaponRecord) -> Self {
        Self {
            id: w.id.get(),
            name: w.name.clone(),
            kind: w.kind.clone(),
            manufacturer: w.manufacturer.clone(),
            caliber: w.caliber.clone(),
            magazine_capacity: w.magazine_capacity,
            fire_rate: w.fire_rate,
            ammo_count: w.ammo_count,
        }
    }
}

pub fn render_weapons(format: &OutputFormat, weapons: &[WeaponRecord]) -> String {
    if weapons.is_empty() && *format == OutputFormat::Table {
        return "No weapons found.".into();
    }
    render_list(format, weapons, |w| WeaponRow::from(w), |w| w.id.to_string())
}

pub fn render_weapon(format: &OutputFormat, weapon: &WeaponRecord) -> String {
    render_single(format, weapon, WeaponRecord::details, |w| w.id.to_string())
}

/// A text payload with its request. JSON payloads are embedded as values,
/// anything else as a string.
#[derive(serde::Serialize)]
pub struct Exchange<'a> {
    #[serde(flatten)]
    pub request: serde_json::Value,
    pub payload: serde_json::Value,
    #[serde(skip)]
    pub raw: &'a str,
}

impl<'a> Exchange<'a> {
    pub fn new(key: &str, request: &str, raw: &'a str) -> Self {
        let payload = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()));
        Self {
            request: serde_json::json!({ key: request }),
            payload,
            raw,
        }
    }
}

/// Table and plain formats print the payload unchanged.
pub fn render_exchange(format: &OutputFormat, exchange: &Exchange<'_>) -> String {
    render_single(format, exchange, |e| e.raw.to_owned(), |e| e.raw.to_owned())
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("error: serialization failed: {e}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use armory_core::WeaponId;

    use super::*;

    fn weapon() -> WeaponRecord {
        WeaponRecord {
            id: WeaponId::new(7).unwrap(),
            name: "AK-47".into(),
            kind: "Assault rifle".into(),
            manufacturer: "Kalashnikov Concern".into(),
            caliber: "7.62x39mm".into(),
            magazine_capacity: 30,
            fire_rate: 600,
            ammo_count: 90,
            images: None,
        }
    }

    #[test]
    fn table_lists_every_column() {
        let out = render_weapons(&OutputFormat::Table, &[weapon()]);
        for header in ["ID", "Name", "Type", "Manufacturer", "Caliber", "Magazine", "Fire Rate", "Ammo"] {
            assert!(out.contains(header), "missing {header} in:\n{out}");
        }
        assert!(out.contains("Kalashnikov Concern"));
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_weapons(&OutputFormat::Table, &[]), "No weapons found.");
        assert_eq!(render_weapons(&OutputFormat::Json, &[]), "[]");
    }

    #[test]
    fn json_uses_wire_field_names() {
        let out = render_weapon(&OutputFormat::JsonCompact, &weapon());
        assert!(out.contains("\"magazineCapacity\":30"));
        assert!(out.contains("\"type\":\"Assault rifle\""));
    }

    #[test]
    fn plain_prints_ids() {
        assert_eq!(render_weapon(&OutputFormat::Plain, &weapon()), "7");
    }

    #[test]
    fn exchange_keeps_raw_text_for_humans() {
        let raw = r#"{"result":{"tags":[]}}"#;
        let ex = Exchange::new("keyword", "rifle", raw);
        assert_eq!(render_exchange(&OutputFormat::Table, &ex), raw);
        let json = render_exchange(&OutputFormat::JsonCompact, &ex);
        assert_eq!(json, r#"{"keyword":"rifle","payload":{"result":{"tags":[]}}}"#);
    }

    #[test]
    fn exchange_wraps_non_json_payloads() {
        let ex = Exchange::new("prompt", "hi", "hello there");
        assert_eq!(
            render_exchange(&OutputFormat::JsonCompact, &ex),
            r#"{"prompt":"hi","payload":"hello there"}"#
        );
    }
}
