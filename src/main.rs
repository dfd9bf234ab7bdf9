use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use git2::Repository;
use log::{debug, info};
use std::io::{self, Write};

use gitstat::config::{Args, Config, OutputFormat};
use gitstat::git::{self, PathContext, StatusEntryBuilder};
use gitstat::logging;

include!(concat!(env!("OUT_DIR"), "/git_sha.rs"));

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("gitstat version 0.1.0 (git: {GIT_SHA})");
        return Ok(());
    }

    let config = Config::load()?;
    let final_config = config.merge_with_args(&args);

    logging::init_logging(final_config.debug.unwrap_or(false))?;
    color_eyre::install()?;

    let current_dir = std::env::current_dir()?;
    let project_root = match &final_config.project_root {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => current_dir.join(path),
        None => current_dir,
    };
    let project_root = project_root
        .canonicalize()
        .wrap_err_with(|| format!("Project directory not found: {project_root:?}"))?;
    info!("Starting gitstat for project: {project_root:?}");

    let context = PathContext::discover(&project_root)?;
    let repo = Repository::open(context.repository_root())?;
    let lines = git::read_statuses(&repo, &final_config.get_status_query())?;

    let builder = StatusEntryBuilder::new(context);
    let entries = builder.build_all(lines);
    debug!("Built {} status entries", entries.len());

    let mut stdout = io::stdout().lock();
    match final_config.output_format.unwrap_or_default() {
        OutputFormat::Text => {
            for entry in &entries {
                writeln!(stdout, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &entries)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
