// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sanspace::builder;
use sanspace::render::{self, RenderOptions};

#[derive(Debug, StructOpt)]
#[structopt(about = "Prints every SAN move string, with the disambiguations that can never occur")]
struct Options {
    /// Print only the included moves, one per line.
    #[structopt(long)]
    plain: bool,

    /// Shorten long move lists to their first and last few entries.
    #[structopt(long)]
    short: bool,

    /// Print only the named section. May be repeated.
    #[structopt(long = "section", value_name = "NAME")]
    sections: Vec<String>,

    /// Do not color the report.
    #[structopt(long)]
    no_color: bool,

    /// Number of leading and trailing moves kept by --short.
    #[structopt(long, default_value = "8")]
    context: usize,
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
    let mut catalog = builder::build().context("failed to build the move catalog")?;
    if !ops.sections.is_empty() {
        for name in &ops.sections {
            if catalog.find(name).is_none() {
                bail!("unknown section {:?}", name);
            }
        }
        catalog.retain_sections(&ops.sections);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if ops.plain {
        render::write_plain(&mut out, &catalog)?;
    } else {
        let options = RenderOptions {
            short: ops.short,
            color: !ops.no_color,
            context: ops.context,
        };
        render::write_report(&mut out, &catalog, &options)?;
    }

    out.flush()?;
    Ok(())
}
