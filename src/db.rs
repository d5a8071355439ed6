// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Purchase storage backed by a single SQLite file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{NewPurchase, Purchase};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.brunorsch", "Pregs", "pregs-tools"));

const DB_FILE: &str = "pregs.db";

const SELECT_PURCHASE: &str =
    "SELECT id, descricao, valor, data, categoria, observacoes FROM compras";

/// Default database location inside the platform data directory.
pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(DB_FILE))
}

/// CRUD access to purchases.
///
/// `update` and `delete` report how many rows they touched; a missing id is
/// not an error for either of them.
pub trait PurchaseStore {
    /// Store a new purchase and return the id assigned to it.
    fn insert(&self, purchase: &NewPurchase) -> Result<i64, StoreError>;

    /// All purchases, most recent date first.
    fn list_all(&self) -> Result<Vec<Purchase>, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no row has this id.
    fn get_by_id(&self, id: i64) -> Result<Purchase, StoreError>;

    /// Overwrite every field but the id of the row matching `purchase.id`.
    fn update(&self, purchase: &Purchase) -> Result<usize, StoreError>;

    fn delete(&self, id: i64) -> Result<usize, StoreError>;
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::init(conn, path)?;
        info!(path = %path.display(), "database initialized");
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let path = Path::new(":memory:");
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init(conn, path)
    }

    fn init(conn: Connection, path: &Path) -> Result<Self, StoreError> {
        conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))
            .map_err(|source| StoreError::Unavailable {
                path: path.to_path_buf(),
                source,
            })?;
        init_schema(&conn).map_err(StoreError::Schema)?;
        Ok(Self { conn })
    }

    /// Release the underlying handle, surfacing any error SQLite reports.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Close(e))
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS compras(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        descricao TEXT NOT NULL,
        valor REAL NOT NULL,
        data DATETIME NOT NULL,
        categoria TEXT,
        observacoes TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
    "#,
    )
}

fn purchase_from_row(r: &Row<'_>) -> rusqlite::Result<Purchase> {
    Ok(Purchase {
        id: r.get(0)?,
        description: r.get(1)?,
        amount: r.get(2)?,
        date: r.get(3)?,
        category: r.get::<_, Option<String>>(4)?.unwrap_or_default(),
        notes: r.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

impl PurchaseStore for Database {
    fn insert(&self, p: &NewPurchase) -> Result<i64, StoreError> {
        self.conn
            .execute(
                "INSERT INTO compras(descricao, valor, data, categoria, observacoes)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![p.description, p.amount, p.date, p.category, p.notes],
            )
            .map_err(StoreError::Write)?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted purchase");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Purchase>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_PURCHASE} ORDER BY data DESC, id DESC"))
            .map_err(StoreError::Query)?;
        let rows = stmt
            .query_map([], purchase_from_row)
            .map_err(StoreError::Query)?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row.map_err(StoreError::Query)?);
        }
        debug!(count = data.len(), "listed purchases");
        Ok(data)
    }

    fn get_by_id(&self, id: i64) -> Result<Purchase, StoreError> {
        self.conn
            .query_row(
                &format!("{SELECT_PURCHASE} WHERE id=?1"),
                params![id],
                purchase_from_row,
            )
            .optional()
            .map_err(StoreError::Query)?
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, p: &Purchase) -> Result<usize, StoreError> {
        let changed = self
            .conn
            .execute(
                "UPDATE compras
                 SET descricao=?1, valor=?2, data=?3, categoria=?4, observacoes=?5
                 WHERE id=?6",
                params![p.description, p.amount, p.date, p.category, p.notes, p.id],
            )
            .map_err(StoreError::Write)?;
        if changed == 0 {
            warn!(id = p.id, "update matched no purchase");
        } else {
            debug!(id = p.id, "updated purchase");
        }
        Ok(changed)
    }

    fn delete(&self, id: i64) -> Result<usize, StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM compras WHERE id=?1", params![id])
            .map_err(StoreError::Write)?;
        if changed == 0 {
            warn!(id, "delete matched no purchase");
        } else {
            debug!(id, "deleted purchase");
        }
        Ok(changed)
    }
}
