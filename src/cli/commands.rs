//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::tree_traits::{LabelStyle, TreeDisplay};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file }) => cmd_tree(file),
        Some(Commands::Roots { file }) => cmd_roots(file),
        Some(Commands::Get { file, path, from }) => cmd_get(file, path, from.as_deref()),
        Some(Commands::Find { file, key, from }) => cmd_find(file, key, from.as_deref()),
        Some(Commands::Leaves { file }) => cmd_leaves(file),
        Some(Commands::Branches { file }) => cmd_branches(file),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run 'gss --help'".to_string(),
        )),
    }
}

/// Settings are layered with the `.gss.toml` next to the entry file.
fn container_for(file: &Path) -> CliResult<ServiceContainer> {
    let settings = Settings::load(file.parent())?;
    debug!(?settings, "effective settings");
    Ok(ServiceContainer::new(settings))
}

#[instrument]
fn cmd_tree(file: &Path) -> CliResult<()> {
    let container = container_for(file)?;
    let service = container.graph_service();
    let graph = service.load(file)?;
    let style = LabelStyle {
        show_contents: container.settings.show_contents,
        mark_shared: container.settings.mark_shared,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for &root in graph.roots() {
        write!(out, "{}", graph.to_tree_string(root, style))
            .map_err(|e| InfraError::output("tree", e))?;
    }
    Ok(())
}

#[instrument]
fn cmd_roots(file: &Path) -> CliResult<()> {
    let container = container_for(file)?;
    let graph = container.graph_service().load(file)?;
    for &root in graph.roots() {
        if let Some(key) = graph.key(root) {
            output::plain(key);
        }
    }
    Ok(())
}

#[instrument]
fn cmd_get(file: &Path, path: &str, from: Option<&str>) -> CliResult<()> {
    let container = container_for(file)?;
    let service = container.graph_service();
    let graph = service.load(file)?;

    let idx = service
        .resolve(&graph, from, path)?
        .ok_or_else(|| CliError::NoMatch(path.to_string()))?;
    if let Some(node) = graph.get_node(idx) {
        output::node(node.key(), node.contents());
    }
    Ok(())
}

#[instrument]
fn cmd_find(file: &Path, key: &str, from: Option<&str>) -> CliResult<()> {
    let container = container_for(file)?;
    let service = container.graph_service();
    let graph = service.load(file)?;

    let idx = service
        .find(&graph, from, key)?
        .ok_or_else(|| CliError::NoMatch(key.to_string()))?;
    if let Some(node) = graph.get_node(idx) {
        output::node(node.key(), node.contents());
        if node.is_shared() {
            let parents: Vec<&str> = node
                .parents()
                .iter()
                .filter_map(|&parent| graph.key(parent))
                .collect();
            output::shared_by(&parents);
        }
    }
    Ok(())
}

#[instrument]
fn cmd_leaves(file: &Path) -> CliResult<()> {
    let container = container_for(file)?;
    let graph = container.graph_service().load(file)?;
    for &root in graph.roots() {
        let Some(root_key) = graph.key(root) else {
            continue;
        };
        output::root(root_key);
        for leaf in graph.leaf_nodes(root) {
            if let Some(key) = graph.key(leaf) {
                output::leaf(key);
            }
        }
    }
    Ok(())
}

#[instrument]
fn cmd_branches(file: &Path) -> CliResult<()> {
    let container = container_for(file)?;
    let service = container.graph_service();
    let graph = service.load(file)?;
    for branch in service.branch_paths(&graph) {
        output::key_path(&branch);
    }
    Ok(())
}

#[instrument]
fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show { dir } => {
            let settings = Settings::load(dir.as_deref())?;
            output::plain(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::plain(&format!("global: {}", path.display())),
                None => output::warning("no home directory, global config disabled"),
            }
            output::plain(&format!(
                "local:  {} (next to the entry file)",
                local_config_path(Path::new(".")).display()
            ));
        }
    }
    Ok(())
}
