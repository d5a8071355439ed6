// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use pregs_tools::db::{Database, PurchaseStore};
use pregs_tools::error::StoreError;
use pregs_tools::models::NewPurchase;
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn purchase(description: &str, amount: f64, date: NaiveDateTime) -> NewPurchase {
    NewPurchase {
        description: description.to_string(),
        amount,
        date,
        category: String::new(),
        notes: String::new(),
    }
}

#[test]
fn insert_then_list_round_trips_fields() {
    let db = Database::open_in_memory().unwrap();
    let p = NewPurchase {
        description: "Café".into(),
        amount: 12.5,
        date: at(2025, 3, 7, 9, 41),
        category: "Alimentação".into(),
        notes: "padaria da esquina".into(),
    };
    let id = db.insert(&p).unwrap();

    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], p.with_id(id));
}

#[test]
fn list_is_empty_without_rows() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.list_all().unwrap().is_empty());
}

#[test]
fn list_orders_by_date_descending() {
    let db = Database::open_in_memory().unwrap();
    db.insert(&purchase("meio", 2.0, at(2025, 2, 1, 12, 0))).unwrap();
    db.insert(&purchase("novo", 3.0, at(2025, 3, 1, 8, 0))).unwrap();
    db.insert(&purchase("velho", 1.0, at(2024, 12, 31, 23, 59))).unwrap();

    let names: Vec<String> = db
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.description)
        .collect();
    assert_eq!(names, ["novo", "meio", "velho"]);
}

#[test]
fn same_date_ties_are_stable() {
    let db = Database::open_in_memory().unwrap();
    let d = at(2025, 1, 1, 0, 0);
    let first = db.insert(&purchase("a", 1.0, d)).unwrap();
    let second = db.insert(&purchase("b", 1.0, d)).unwrap();

    let ids: Vec<i64> = db.list_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, [second, first]);
    let again: Vec<i64> = db.list_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, again);
}

#[test]
fn get_by_id_unknown_is_not_found() {
    let db = Database::open_in_memory().unwrap();
    db.insert(&purchase("x", 1.0, at(2025, 1, 1, 0, 0))).unwrap();
    assert!(matches!(db.get_by_id(42), Err(StoreError::NotFound(42))));
}

#[test]
fn delete_unknown_id_is_silent_and_keeps_rows() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert(&purchase("x", 1.0, at(2025, 1, 1, 0, 0))).unwrap();

    assert_eq!(db.delete(id + 100).unwrap(), 0);
    let all = db.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);

    assert_eq!(db.delete(id).unwrap(), 1);
    assert!(matches!(db.get_by_id(id), Err(StoreError::NotFound(_))));
}

#[test]
fn update_overwrites_everything_but_id() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert(&purchase("x", 1.0, at(2025, 1, 1, 0, 0))).unwrap();

    let mut p = db.get_by_id(id).unwrap();
    p.description = "Mercado".into();
    p.amount = -7.25;
    p.date = at(2025, 4, 2, 18, 30);
    p.category = "Casa".into();
    p.notes = "estorno".into();
    assert_eq!(db.update(&p).unwrap(), 1);

    assert_eq!(db.get_by_id(id).unwrap(), p);
}

#[test]
fn update_unknown_id_changes_nothing() {
    let db = Database::open_in_memory().unwrap();
    let id = db.insert(&purchase("x", 1.0, at(2025, 1, 1, 0, 0))).unwrap();
    let mut ghost = db.get_by_id(id).unwrap();
    ghost.id = id + 1;
    ghost.description = "fantasma".into();

    assert_eq!(db.update(&ghost).unwrap(), 0);
    assert_eq!(db.get_by_id(id).unwrap().description, "x");
}

#[test]
fn ids_are_not_reused_after_delete() {
    let db = Database::open_in_memory().unwrap();
    let d = at(2025, 1, 1, 0, 0);
    db.insert(&purchase("a", 1.0, d)).unwrap();
    let b = db.insert(&purchase("b", 1.0, d)).unwrap();
    db.delete(b).unwrap();
    let c = db.insert(&purchase("c", 1.0, d)).unwrap();
    assert!(c > b);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pregs.db");

    let db = Database::open(&path).unwrap();
    let id = db
        .insert(&purchase("Livro", 59.9, at(2025, 5, 10, 14, 0)))
        .unwrap();
    db.close().unwrap();

    let db = Database::open(&path).unwrap();
    let p = db.get_by_id(id).unwrap();
    assert_eq!(p.description, "Livro");
    assert_eq!(p.amount, 59.9);
    db.close().unwrap();
}

#[test]
fn created_at_is_filled_by_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pregs.db");
    let db = Database::open(&path).unwrap();
    db.insert(&purchase("x", 1.0, at(2025, 1, 1, 0, 0))).unwrap();
    db.close().unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    let created: Option<String> = conn
        .query_row("SELECT created_at FROM compras", [], |r| r.get(0))
        .unwrap();
    assert!(created.is_some());
}

#[test]
fn open_fails_for_unreachable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("pregs.db");
    assert!(matches!(
        Database::open(&path),
        Err(StoreError::Unavailable { .. })
    ));
}

#[test]
fn open_non_database_file_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pregs.db");
    std::fs::write(&path, vec![b'x'; 4096]).unwrap();
    assert!(matches!(Database::open(&path), Err(StoreError::Schema(_))));
}
