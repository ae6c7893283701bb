//! Commodity trade dashboard CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use komoditas_cli::commands::{
    SearchRequest, describe_kinds, list_commodities, list_offices, run_overview, run_search,
};
use komoditas_cli::config::{AppConfig, ConfigSources};
use komoditas_cli::logging::{LogConfig, LogFormat, init_logging};
use komoditas_cli::summary::{choices_table, kinds_table, overview_table, print_search};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, SearchArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let sources = ConfigSources::from_env(cli.config, cli.data_dir);
    let config = AppConfig::resolve(&sources).context("load configuration")?;
    match cli.command {
        Command::Kinds => {
            println!("{}", kinds_table(&describe_kinds(&config)));
            Ok(0)
        }
        Command::Offices { kind } => {
            let offices = list_offices(&config, kind)?;
            println!("{}", choices_table("Satpel", &offices));
            Ok(0)
        }
        Command::Commodities { kind, satpel } => {
            let commodities = list_commodities(&config, kind, satpel.as_deref())?;
            println!("{}", choices_table("Komoditas", &commodities));
            Ok(0)
        }
        Command::Search(args) => search(&config, args),
        Command::Overview => {
            let rows = run_overview(&config);
            println!("{}", overview_table(&rows));
            Ok(i32::from(rows.iter().any(|row| row.is_failure())))
        }
    }
}

fn search(config: &AppConfig, args: SearchArgs) -> Result<i32> {
    let request = SearchRequest {
        kind: args.kind,
        satpel: args.satpel,
        komoditas: args.komoditas,
        export_dir: args.export,
    };
    let result = run_search(config, &request)?;
    if args.json {
        println!("{}", result.to_json()?);
    } else {
        print_search(&result);
    }
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
