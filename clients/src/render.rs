//! Text and JSON rendering of query and calculation results.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use geo_ontology::{ClassRef, IndividualRef, PropertyAssertions, PropertyTable};
use geo_shapes::{Metrics, Shape};
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lists and tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A numbered list, one entry per line, `#n` usable as a selection.
pub fn numbered<T: std::fmt::Display>(heading: &str, items: &[T]) -> String {
    let mut out = format!("{heading} ({})\n", items.len());
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "  #{:<3} {}", i + 1, item);
    }
    out
}

/// A two-column Property/Value table.
pub fn table(heading: &str, table: &PropertyTable) -> String {
    let width = table
        .iter()
        .map(|row| row.property.len())
        .max()
        .unwrap_or(0)
        .max("Property".len());
    let mut out = format!("{heading}\n  {:<width$}  Value\n", "Property");
    for row in table {
        let _ = writeln!(out, "  {:<width$}  {}", row.property, row.joined());
    }
    out
}

/// Classes as text or JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn classes(mode: OutputMode, classes: &[ClassRef]) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(numbered("Classes", classes)),
        OutputMode::Json => json(&classes),
    }
}

/// Individuals of `class` as text or JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn individuals(mode: OutputMode, class: &str, individuals: &[IndividualRef]) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(numbered(&format!("Individuals of {class}"), individuals)),
        OutputMode::Json => json(&individuals),
    }
}

/// Object and data property tables of `individual` as text or JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn properties(
    mode: OutputMode,
    individual: &str,
    assertions: &PropertyAssertions,
) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(format!(
            "{individual}\n{}{}",
            table("Object Properties", &assertions.object),
            table("Data Properties", &assertions.data)
        )),
        OutputMode::Json => json(assertions),
    }
}

#[derive(Serialize)]
struct Calculation {
    shape: Shape,
    #[serde(flatten)]
    metrics: Metrics,
}

/// A calculation result as the metrics line or JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn calculation(mode: OutputMode, shape: Shape, metrics: Metrics) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(format!("{metrics}\n")),
        OutputMode::Json => json(&Calculation { shape, metrics }),
    }
}

/// Metrics without a shape, as the metrics line or JSON.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn metrics(mode: OutputMode, metrics: Metrics) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(format!("{metrics}\n")),
        OutputMode::Json => json(&metrics),
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    out.push('\n');
    Ok(out)
}
