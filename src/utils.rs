// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::error::CommandError;

const ELLIPSIS: &str = "...";

pub fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CommandError::invalid("--data", s, format!("{e}, esperado YYYY-MM-DD")))
}

pub fn parse_amount(s: &str) -> Result<f64, CommandError> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|e| CommandError::invalid("--valor", s, e))?;
    if !v.is_finite() {
        return Err(CommandError::invalid("--valor", s, "número não finito"));
    }
    Ok(v)
}

pub fn parse_id(s: &str) -> Result<i64, CommandError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| CommandError::invalid("ID", s, "ID deve ser um número inteiro"))
}

/// Shorten `s` to at most `max` characters, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

pub fn fmt_money(v: f64) -> String {
    format!("R$ {:.2}", v)
}

pub fn fmt_day(d: &NaiveDateTime) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn fmt_day_time(d: &NaiveDateTime) -> String {
    d.format("%d/%m/%Y %H:%M").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
