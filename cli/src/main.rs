mod args;
mod terminal;

use std::sync::Arc;

use anyhow::Context;

use args::CommandLine;
use originmap_core::{input, prober::HttpProber, report::StdoutSink, scanner};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init(cfg.silent);

    let ips = input::load_targets(&commands.ips).context("loading IP targets")?;
    let hosts = input::load_targets(&commands.hosts).context("loading host targets")?;

    if !cfg.silent {
        print::header("probing origin candidates");
    }

    let prober = Arc::new(HttpProber::new(cfg.timeout)?);
    let sink = Arc::new(StdoutSink);

    let summary = scanner::perform_scan(&ips, &hosts, &cfg, prober, sink).await;

    if !cfg.silent {
        print::summary(&summary);
    }

    Ok(())
}
