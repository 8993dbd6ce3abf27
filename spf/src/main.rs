use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use log::{error, info, warn};

use spf::config::SPFConfig;
use spf::io;
use spf::io::cli::Cli;
use spf::io::output::SPFOutput;
use spf::opt::batch::pack_batch;
use trapack::io::export;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SPFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed SPFConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instances = args
        .input_file
        .iter()
        .map(|path| io::read_instance(path))
        .collect::<Result<Vec<_>>>()?;

    let outcomes = pack_batch(&ext_instances, &config)?;

    let mut n_failed = 0;
    for ((input_file, ext_instance), outcome) in
        args.input_file.iter().zip(ext_instances).zip(outcomes)
    {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("[MAIN] skipping {}: {err:#}", input_file.display());
                n_failed += 1;
                continue;
            }
        };
        if outcome.result.exhausted {
            warn!(
                "[MAIN] packing of '{}' stopped at the iteration cap, fewer details than possible may be placed",
                ext_instance.name
            );
        }

        let input_stem = input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(ext_instance.name.as_str())
            .to_owned();

        let output = SPFOutput {
            solution: export::export(
                &outcome.sheet,
                &outcome.rect,
                &outcome.result,
                outcome.run_time_ms,
            ),
            instance: ext_instance,
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    if n_failed > 0 {
        bail!("{n_failed} instance(s) could not be packed");
    }
    Ok(())
}
