// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::PurchaseStore;
use crate::error::CommandError;
use crate::models::{NewPurchase, Purchase};
use crate::utils::{
    fmt_day, fmt_day_time, fmt_money, maybe_print_json, parse_amount, parse_date, parse_id,
    pretty_table, truncate,
};
use anyhow::{Result, bail};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::ArgMatches;
use std::fmt::Write;
use tracing::debug;

const DESCRIPTION_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 13;
const NOTES_WIDTH: usize = 50;

/// Run one purchase action. Validation and storage failures are reported on
/// stderr and do not fail the process.
pub fn handle<S: PurchaseStore>(store: &S, action: &str, m: &ArgMatches) -> Result<()> {
    match action {
        "add" => match add(store, m) {
            Ok(id) => println!("Compra #{} adicionada com sucesso!", id),
            Err(e) => report(&e),
        },
        "list" => match list(store) {
            Ok(data) => {
                if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &data)? {
                    println!("{}", render_list(&data));
                }
            }
            Err(e) => report(&e),
        },
        "search" => match search(store, m) {
            Ok(p) => {
                if !maybe_print_json(m.get_flag("json"), false, &p)? {
                    println!("{}", render_detail(&p));
                }
            }
            Err(e) => report(&e),
        },
        "delete" => match delete(store, m) {
            Ok(id) => println!("Compra #{} deletada com sucesso!", id),
            Err(e) => report(&e),
        },
        "update" => match update(store, m) {
            Ok(p) => println!("Compra #{} atualizada com sucesso!", p.id),
            Err(e) => report(&e),
        },
        other => bail!("unknown command '{}'", other),
    }
    Ok(())
}

fn report(e: &CommandError) {
    debug!(error = ?e, "action aborted");
    eprintln!("Erro: {}", e);
}

pub fn add<S: PurchaseStore>(store: &S, m: &ArgMatches) -> Result<i64, CommandError> {
    let description = required_text(m, "descricao")?;
    let amount = parse_amount(
        m.get_one::<String>("valor")
            .ok_or(CommandError::MissingArgument("valor"))?,
    )?;
    let date = match m.get_one::<String>("data") {
        Some(s) => start_of_day(s)?,
        None => Local::now().naive_local(),
    };
    let purchase = NewPurchase {
        description,
        amount,
        date,
        category: optional_text(m, "categoria").unwrap_or_default(),
        notes: optional_text(m, "observacoes").unwrap_or_default(),
    };
    Ok(store.insert(&purchase)?)
}

pub fn list<S: PurchaseStore>(store: &S) -> Result<Vec<Purchase>, CommandError> {
    Ok(store.list_all()?)
}

pub fn search<S: PurchaseStore>(store: &S, m: &ArgMatches) -> Result<Purchase, CommandError> {
    let id = id_from(m)?;
    Ok(store.get_by_id(id)?)
}

/// Deleting an id that does not exist still counts as success.
pub fn delete<S: PurchaseStore>(store: &S, m: &ArgMatches) -> Result<i64, CommandError> {
    let id = id_from(m)?;
    store.delete(id)?;
    Ok(id)
}

/// Overwrite the supplied fields of an existing purchase.
pub fn update<S: PurchaseStore>(store: &S, m: &ArgMatches) -> Result<Purchase, CommandError> {
    let id = id_from(m)?;
    let mut p = store.get_by_id(id)?;
    if m.get_one::<String>("descricao").is_some() {
        p.description = required_text(m, "descricao")?;
    }
    if let Some(v) = m.get_one::<String>("valor") {
        p.amount = parse_amount(v)?;
    }
    if let Some(d) = m.get_one::<String>("data") {
        p.date = start_of_day(d)?;
    }
    if let Some(c) = optional_text(m, "categoria") {
        p.category = c;
    }
    if let Some(o) = optional_text(m, "observacoes") {
        p.notes = o;
    }
    store.update(&p)?;
    Ok(p)
}

fn id_from(m: &ArgMatches) -> Result<i64, CommandError> {
    let raw = m
        .get_one::<String>("id")
        .ok_or(CommandError::MissingArgument("id"))?;
    parse_id(raw)
}

/// Blank values count as missing; the stored text keeps its whitespace.
fn required_text(m: &ArgMatches, name: &'static str) -> Result<String, CommandError> {
    m.get_one::<String>(name)
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .ok_or(CommandError::MissingArgument(name))
}

fn optional_text(m: &ArgMatches, name: &str) -> Option<String> {
    m.get_one::<String>(name).cloned()
}

fn start_of_day(s: &str) -> Result<NaiveDateTime, CommandError> {
    Ok(parse_date(s)?.and_time(NaiveTime::MIN))
}

/// Output of `list`: the table, or a notice when there is nothing to show.
pub fn render_list(data: &[Purchase]) -> String {
    if data.is_empty() {
        return "Nenhuma compra encontrada.".to_string();
    }
    render_table(data)
}

/// Fixed-width listing used by `list`.
pub fn render_table(data: &[Purchase]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<30} {:<11} {:<12} {:<15} {}",
        "ID", "Descrição", "Valor", "Data", "Categoria", "Observações"
    );
    out.push_str(&"-".repeat(88));
    for p in data {
        let _ = write!(
            out,
            "\n{:<5} {:<30} {:<11} {:<12} {:<15} {}",
            p.id,
            truncate(&p.description, DESCRIPTION_WIDTH),
            fmt_money(p.amount),
            fmt_day(&p.date),
            truncate(&p.category, CATEGORY_WIDTH),
            truncate(&p.notes, NOTES_WIDTH),
        );
    }
    out
}

/// Single-record view used by `search`; nothing is truncated.
pub fn render_detail(p: &Purchase) -> String {
    let rows = vec![
        vec!["Descrição".to_string(), p.description.clone()],
        vec!["Valor".to_string(), fmt_money(p.amount)],
        vec!["Data".to_string(), fmt_day_time(&p.date)],
        vec!["Categoria".to_string(), p.category.clone()],
        vec!["Observações".to_string(), p.notes.clone()],
    ];
    format!(
        "Compra #{}:\n{}",
        p.id,
        pretty_table(&["Campo", "Valor"], rows)
    )
}
