//! Module: output
//! Responsibility: render command results as plain text or JSON.

use crate::{config::OutputFormat, error::CliResult};
use fracdex::core::OrderKey;
use serde::Serialize;
use std::{cmp::Ordering, io::Write};

#[derive(Serialize)]
struct KeyOutput<'a> {
    key: &'a OrderKey,
}

///
/// KeyReport
/// Validity of one key as reported by `validate`.
///

#[derive(Debug, Serialize)]
pub struct KeyReport<'a> {
    pub key: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
struct CheckOutput {
    ok: bool,
    count: usize,
}

#[derive(Serialize)]
struct CompareOutput {
    ordering: &'static str,
}

pub fn key(out: &mut impl Write, format: OutputFormat, key: &OrderKey) -> CliResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{key}")?,
        OutputFormat::Json => json_line(out, &KeyOutput { key })?,
    }

    Ok(())
}

pub fn keys(out: &mut impl Write, format: OutputFormat, keys: &[OrderKey]) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for key in keys {
                writeln!(out, "{key}")?;
            }
        }
        OutputFormat::Json => json_line(out, &keys)?,
    }

    Ok(())
}

pub fn reports(out: &mut impl Write, format: OutputFormat, reports: &[KeyReport<'_>]) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                match &report.error {
                    None => writeln!(out, "{}\tvalid", report.key)?,
                    Some(error) => writeln!(out, "{}\tinvalid: {error}", report.key)?,
                }
            }
        }
        OutputFormat::Json => json_line(out, &reports)?,
    }

    Ok(())
}

pub fn check(out: &mut impl Write, format: OutputFormat, count: usize) -> CliResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "ok: {count} keys in order")?,
        OutputFormat::Json => json_line(out, &CheckOutput { ok: true, count })?,
    }

    Ok(())
}

pub fn ordering(out: &mut impl Write, format: OutputFormat, ordering: Ordering) -> CliResult<()> {
    let label = match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };

    match format {
        OutputFormat::Text => writeln!(out, "{label}")?,
        OutputFormat::Json => json_line(out, &CompareOutput { ordering: label })?,
    }

    Ok(())
}

fn json_line(out: &mut impl Write, value: &impl Serialize) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}
