// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the purchase store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("não foi possível abrir o banco de dados em {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("erro ao criar tabelas: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("compra #{0} não encontrada")]
    NotFound(i64),

    #[error("erro ao gravar compra: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("erro ao consultar compras: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("erro ao fechar banco de dados: {0}")]
    Close(#[source] rusqlite::Error),
}

/// Failures of a single CLI action. None of these are fatal to the process.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("argumento obrigatório ausente: --{0}")]
    MissingArgument(&'static str),

    #[error("valor inválido para {arg} '{value}': {reason}")]
    InvalidArgument {
        arg: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    pub fn invalid(arg: &'static str, value: &str, reason: impl ToString) -> Self {
        CommandError::InvalidArgument {
            arg,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
