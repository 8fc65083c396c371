//! Command implementation for sdd-scaffold.
//!
//! The tool has a single command. [`run`] wires the pipeline together:
//! resolve configuration, load the manifest, plan, then either print the
//! plan (`--dry-run`) or execute it and print a summary.

mod prompt;

use crate::cli::Cli;
use crate::config::{ResolvedConfig, RuntimeFacts, StoredConfig, resolve};
use crate::context::TemplateContext;
use crate::error::{Result, ScaffoldError};
use crate::executor::{ExecuteOptions, execute};
use crate::manifest::Manifest;
use crate::plan::{format_plan, format_summary, plan};
use std::path::{Path, PathBuf};

/// Run the scaffolding pipeline in the current directory.
pub fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        ScaffoldError::Execution(format!("failed to determine current directory: {}", e))
    })?;

    let stored = StoredConfig::load_from_dir(&cwd)?;
    let config = resolve(&cli.to_options(), &stored, &RuntimeFacts::current())?;

    let templates_root = cwd.join(&cli.templates);
    let manifest_path = manifest_path(cli, &cwd, &templates_root, &config);
    let manifest = Manifest::load(&manifest_path)?;

    let context = TemplateContext::build(
        config.agent,
        config.lang,
        &config.kiro_dir,
        &stored.agent_layouts,
    );
    for (name, value) in context.iter() {
        tracing::debug!(placeholder = name, value, "template context");
    }
    let planned = plan(&manifest, &config, &context);

    if config.dry_run {
        println!(
            "Dry run: agent={}, os={}, lang={} (no files written)",
            config.agent, config.resolved_os, config.lang
        );
        print!("{}", format_plan(&planned));
        return Ok(());
    }

    let mut ask = prompt::ask_overwrite;
    let result = execute(
        &planned,
        &config,
        ExecuteOptions {
            cwd: &cwd,
            templates_root: &templates_root,
            on_conflict: Some(&mut ask),
        },
    )?;

    println!("{}", format_summary(&result));
    Ok(())
}

/// Explicit `--manifest`, else `<templates>/manifests/<agent>.json`.
fn manifest_path(
    cli: &Cli,
    cwd: &Path,
    templates_root: &Path,
    config: &ResolvedConfig,
) -> PathBuf {
    match &cli.manifest {
        Some(path) => cwd.join(path),
        None => templates_root
            .join("manifests")
            .join(format!("{}.json", config.agent)),
    }
}
