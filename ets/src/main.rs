use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{error, info, warn};

use ets::config::ETSConfig;
use ets::io;
use ets::io::cli::Cli;
use ets::io::output::ETSOutput;
use ets::opt::{ETSRun, RunOutcome};
use figfit::io::export;
use figfit::io::ext_repr::ExtInstance;
use figfit::io::svg::annotation_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ETSConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] successfully parsed ETSConfig: {config:?}");

    fs::create_dir_all(&args.solution_folder).with_context(|| {
        format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        )
    })?;

    let instance_paths = io::collect_instance_paths(&args.input_path)?;
    info!("[MAIN] {} instance(s) to process", instance_paths.len());

    let mut n_no_verdict = 0;
    for path in instance_paths {
        let start = Instant::now();
        let run = io::read_instance(&path)
            .and_then(|ext| ets::opt::run(&ext, &config).map(|run| (ext, run)));

        match run {
            Ok((ext_instance, run)) => {
                write_outputs(ext_instance, &run, config, start, &args.solution_folder)?
            }
            Err(err) => {
                error!("[MAIN] no verdict for {}: {err}", path.display());
                n_no_verdict += 1;
            }
        }
    }

    if n_no_verdict > 0 {
        warn!("[MAIN] {n_no_verdict} instance(s) without verdict");
    }
    Ok(())
}

fn write_outputs(
    ext_instance: ExtInstance,
    run: &ETSRun,
    config: ETSConfig,
    start: Instant,
    output_folder: &Path,
) -> Result<()> {
    let name = ext_instance.name.clone();
    let placed = run.outcome.all_placed();

    let solution = match &run.outcome {
        RunOutcome::Joint(result) => export::export_packing(&run.instance, result, start),
        RunOutcome::Individual(results) => {
            export::export_individual(&run.instance, results, start)
        }
    };

    {
        let output = ETSOutput {
            instance: ext_instance,
            solution,
            stats: run.stats,
            config,
        };
        let solution_path = output_folder.join(format!("sol_{name}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{name}.svg"));
        let title = match placed {
            true => "placed",
            false => "not placed",
        };
        let svg = annotation_to_svg(
            &run.instance,
            &run.outcome.placements(),
            config.svg_draw_options,
            title,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
