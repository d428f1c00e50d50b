use anyhow::{Context, Result};
use tracing::info_span;

use flatcache_ingest::{DataSetCache, ImportOptions, ImportSummary, Importer, SeedType, probe};

use crate::cli::{ImportArgs, ProbeArgs};
use flatcache_cli::progress::ProgressObserver;
use flatcache_cli::summary::{print_summary, probe_table};

pub fn run_import(args: &ImportArgs) -> Result<ImportSummary> {
    let span = info_span!("import_command", path = %args.path.display());
    let _guard = span.enter();

    let options = import_options(args);
    let mut cache = DataSetCache::new();
    let summary = if args.progress {
        Importer::new(options)
            .with_observer(ProgressObserver::new())
            .import(&mut cache, &args.path)
    } else {
        Importer::new(options).import(&mut cache, &args.path)
    }
    .with_context(|| format!("import {}", args.path.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        println!("{json}");
    } else {
        print_summary(&summary);
    }
    Ok(summary)
}

pub fn run_probe(args: &ProbeArgs) -> Result<()> {
    let table = probe_table(args.values.iter().map(|v| (v.as_str(), probe(v))));
    println!("{table}");
    Ok(())
}

fn import_options(args: &ImportArgs) -> ImportOptions {
    let options = ImportOptions::default()
        .with_delimiter(args.delimiter)
        .with_seed(SeedType::from(args.seed));
    if args.progress {
        options.with_progress_interval(args.progress_interval)
    } else {
        options
    }
}
