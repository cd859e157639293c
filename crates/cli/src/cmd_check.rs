// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `kindly check`.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use termcolor::{ColorChoice, StandardStream};

use kindly::cli::{CheckArgs, Cli, OutputFormat};
use kindly::config;
use kindly::report;
use kindly::rules::RuleTable;
use kindly::runner::{FileReport, Runner, Summary};
use kindly::walker::{FileWalker, WalkerConfig};

const STDIN: &str = "-";

pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    let table = config.select_rules(RuleTable::builtin()?);
    let walker = FileWalker::new(WalkerConfig::from_check_config(&config.check))?;
    let runner = Runner::new(&table);

    let mut reports = Vec::new();
    for path in args.effective_paths() {
        if path.as_os_str() == STDIN {
            let text = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
            reports.push(FileReport::from_text(Path::new("<stdin>"), &text, &table));
            continue;
        }
        if !path.exists() {
            bail!("path not found: {}", path.display());
        }
        let (files, stats) = walker.walk_collect(&path);
        reports.extend(runner.run(&files));
        reports.extend(stats.errors.iter().map(FileReport::from_walk_error));
    }

    let formatter = report::formatter(args.output, args.effective_limit());
    if reports.is_empty() {
        print!("{}", formatter.format_empty());
    } else {
        let choice = match args.output {
            OutputFormat::Text => args.color.resolve(args.no_color),
            OutputFormat::Json => ColorChoice::Never,
        };
        let mut stdout = StandardStream::stdout(choice);
        formatter.format_to(&mut stdout, &reports)?;
    }

    Ok(exit_code(&Summary::of(&reports), args.strict))
}

fn exit_code(summary: &Summary, strict: bool) -> ExitCode {
    if summary.errors > 0 {
        ExitCode::from(2)
    } else if summary.non_inclusive > 0 || (strict && summary.results() > 0) {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
