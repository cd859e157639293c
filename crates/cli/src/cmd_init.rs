// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `kindly init`.

use std::process::ExitCode;

use anyhow::{Context, bail};

use kindly::cli::InitArgs;
use kindly::config::{CONFIG_FILE, defaults};

pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let path = cwd.join(CONFIG_FILE);

    if path.exists() && !args.force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    std::fs::write(&path, defaults::TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {CONFIG_FILE}");
    Ok(ExitCode::SUCCESS)
}
