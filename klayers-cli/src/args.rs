// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]
use anyhow::Result;
use std::io::Write;
use structopt::StructOpt;

/// Command-line options shared by every subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "klayers-cli", about = "Drives the Klayers build pipeline")]
pub struct KlayersOpt {
    /// Log level [default: info]
    #[structopt(
        short = "L",
        long = "log-level",
        possible_values = &["error", "warn", "info", "debug", "trace", "off"]
    )]
    pub log_level: Option<String>,

    /// Log ultra-verbose (trace level) information
    #[structopt(long = "trace")]
    pub trace: bool,

    /// Suppress all output
    #[structopt(long = "silent")]
    pub silent: bool,

    /// AWS region of the pipeline stack [default: from settings]
    #[structopt(long = "region")]
    pub region: Option<String>,

    /// Named credentials profile [default: from settings]
    #[structopt(long = "profile")]
    pub profile: Option<String>,

    /// CloudFormation stack that owns the pipeline [default: from settings]
    #[structopt(long = "stack")]
    pub stack: Option<String>,

    /// Pipeline state machine ARN; skips the stack lookup
    #[structopt(long = "arn")]
    pub arn: Option<String>,

    #[structopt(subcommand)]
    pub cmd: Command,
}

/// The available subcommands.
#[derive(Debug, Clone, StructOpt)]
pub enum Command {
    /// Builds a layer for one package and prints the final pipeline status
    Execute {
        /// The Python package to build
        #[structopt(short = "p", long = "package")]
        package: String,

        /// Fails unless the pipeline stops with this status
        #[structopt(short = "e", long = "expect")]
        expect: Option<String>,
    },
    /// Builds `requests`, `idna` and a package that does not exist, and checks
    /// that only the last one fails
    Check,
}

pub fn get_logging(opt: &KlayersOpt) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    let level = if opt.trace {
        log::LevelFilter::Trace
    } else if opt.silent {
        log::LevelFilter::Off
    } else {
        match opt.log_level.as_deref() {
            Some("error") => log::LevelFilter::Error,
            Some("warn") => log::LevelFilter::Warn,
            Some("debug") => log::LevelFilter::Debug,
            Some("trace") => log::LevelFilter::Trace,
            Some("off") => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        }
    };
    builder.filter(None, level);
    builder.filter_module("rusoto_core", log::LevelFilter::Warn);
    builder.filter_module("hyper", log::LevelFilter::Warn);

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            writeln!(
                f,
                "[{}] {}",
                record.level().to_string().to_lowercase(),
                record.args()
            )
        });
    }

    Ok(builder)
}
