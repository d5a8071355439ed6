// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;

use pregs_tools::{cli, commands, db, tui};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let path = match matches.get_one::<PathBuf>("db") {
        Some(p) => p.clone(),
        None => db::db_path()?,
    };
    let store = db::Database::open(&path).context("Erro ao inicializar banco de dados")?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Banco de dados inicializado em {}", path.display());
        }
        Some(("tui", _)) => tui::run()?,
        Some((action, sub)) => commands::purchases::handle(&store, action, sub)?,
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    store.close()?;
    Ok(())
}
