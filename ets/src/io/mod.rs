use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{LevelFilter, info, warn};
use serde::Serialize;
use svg::Document;

use figfit::PlacerError;
use figfit::io::ext_repr::ExtInstance;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Reads an instance file. A missing file and an unparsable one are reported separately.
pub fn read_instance(path: &Path) -> Result<ExtInstance, PlacerError> {
    if !path.exists() {
        return Err(PlacerError::InputNotFound(path.to_path_buf()));
    }
    let unreadable = |reason: String| PlacerError::UnreadableInput {
        path: path.to_path_buf(),
        reason,
    };
    let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| unreadable(e.to_string()))
}

/// Resolves the input path to the instance files to process:
/// the file itself, or every `.json` file directly inside a folder, sorted by name.
pub fn collect_instance_paths(path: &Path) -> Result<Vec<PathBuf>, PlacerError> {
    if !path.exists() {
        return Err(PlacerError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let entries = fs::read_dir(path).map_err(|e| PlacerError::UnreadableInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let paths = entries
        .filter_map(|entry| entry_path(entry, path))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .sorted()
        .collect_vec();
    Ok(paths)
}

/// Path of a directory entry, `None` (with a warning) if the entry could not be read.
fn entry_path(entry: std::io::Result<fs::DirEntry>, folder: &Path) -> Option<PathBuf> {
    match entry {
        Ok(e) => Some(e.path()),
        Err(e) => {
            warn!("[IO] skipping unreadable entry in {}: {e}", folder.display());
            None
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {}", path.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {}", path.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] start: {}", jiff::Timestamp::now());
    Ok(())
}
