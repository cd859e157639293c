// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `kindly rules`.

use std::process::ExitCode;

use anyhow::Context;

use kindly::cli::{Cli, OutputFormat, RulesArgs};
use kindly::config;
use kindly::rules::RuleTable;

pub fn run(cli: &Cli, args: &RulesArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let table = config.select_rules(RuleTable::builtin()?);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Text => {
            for rule in &table {
                let phrases: Vec<&str> = rule.phrases().iter().map(|p| p.text()).collect();
                println!(
                    "{:<24} {:<26} {:<11} {}",
                    rule.identifier(),
                    rule.severity().as_str(),
                    rule.category(),
                    phrases.join(", ")
                );
            }
            println!("{} rules", table.len());
        }
    }
    Ok(ExitCode::SUCCESS)
}
