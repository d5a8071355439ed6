// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("pt")
        .about("Ferramenta CLI e TUI para pregs-tools")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Arquivo do banco de dados (padrão: diretório de dados do usuário)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Exibe logs de diagnóstico"),
        )
        .subcommand(Command::new("init").about("Cria o banco de dados e mostra seu caminho"))
        .subcommand(
            Command::new("add")
                .visible_alias("adicionar")
                .about("Adiciona uma nova compra")
                .args(purchase_args(true)),
        )
        .subcommand(
            Command::new("list")
                .visible_alias("listar")
                .about("Lista todas as compras")
                .arg(json_flag())
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json")
                        .help("Uma compra JSON por linha"),
                ),
        )
        .subcommand(
            Command::new("search")
                .visible_alias("buscar")
                .about("Busca uma compra pelo ID")
                .arg(id_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("delete")
                .visible_alias("deletar")
                .about("Deleta uma compra pelo ID")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("update")
                .visible_alias("atualizar")
                .about("Atualiza os campos informados de uma compra")
                .arg(id_arg())
                .args(purchase_args(false)),
        )
        .subcommand(Command::new("tui").about("Inicia a interface TUI"))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_name("ID")
        .allow_negative_numbers(true)
        .help("ID da compra")
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Saída em JSON")
}

/// Purchase field flags shared by `add` (description and amount required)
/// and `update` (everything optional).
fn purchase_args(required: bool) -> [Arg; 5] {
    let tag = if required { " (obrigatório)" } else { "" };
    [
        Arg::new("descricao")
            .short('d')
            .long("descricao")
            .required(required)
            .help(format!("Descrição da compra{tag}")),
        Arg::new("valor")
            .short('a')
            .long("valor")
            .required(required)
            .allow_negative_numbers(true)
            .help(format!("Valor da compra{tag}")),
        Arg::new("data")
            .short('t')
            .long("data")
            .value_name("YYYY-MM-DD")
            .help(if required {
                "Data da compra (padrão: agora)"
            } else {
                "Data da compra"
            }),
        Arg::new("categoria")
            .short('c')
            .long("categoria")
            .help("Categoria da compra"),
        Arg::new("observacoes")
            .short('o')
            .long("observacoes")
            .help("Observações adicionais"),
    ]
}
