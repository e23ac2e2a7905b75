// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sanspace::normalize::{self, Results};

#[derive(Debug, StructOpt)]
#[structopt(about = "Sums played move counts by piece, destination and promotion")]
struct Options {
    /// JSON file with a "moves" object mapping SAN strings to counts.
    #[structopt(name = "RESULTS", parse(from_os_str), default_value = "results.json")]
    results: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env("SANSPACE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let ops = Options::from_args();
    let text = fs::read_to_string(&ops.results)
        .with_context(|| format!("failed to read {}", ops.results.display()))?;
    let results: Results = serde_json::from_str(&text)
        .with_context(|| format!("failed to decode {}", ops.results.display()))?;

    let counts = normalize::count_normalized(&results)?;
    println!("{}", normalize::to_json(&counts)?);
    Ok(())
}
