//! CLI command implementations
//!
//! Each submodule implements one command group. Results are printed to
//! stdout as pretty JSON.

pub mod clt;
pub mod explore;

use serde::Serialize;

use crate::Result;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a `key=value` parameter assignment
pub fn parse_param(raw: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in '{}'", raw));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((key.to_string(), value))
}

/// Parse a `lo,hi` display range
pub fn parse_range(raw: &str) -> std::result::Result<(f64, f64), String> {
    let (lo, hi) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected lo,hi, got '{}'", raw))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a number", s.trim()))
    };
    let (lo, hi) = (parse(lo)?, parse(hi)?);
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(format!("range must satisfy lo < hi, got '{}'", raw));
    }
    Ok((lo, hi))
}
