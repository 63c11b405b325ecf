//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{write_list, write_node, ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::ChainArena;

/// Execute the parsed command, writing results to stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    run_command(cli, &mut io::stdout().lock())
}

/// Execute the parsed command, writing results to `out`.
///
/// Settings are loaded only for commands that render chains or show them.
pub fn run_command<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let settings = match &cli.command {
        Some(Commands::Demo)
        | Some(Commands::Print { .. })
        | Some(Commands::Config {
            command: ConfigCommands::Show,
        })
        | None => Settings::load(cli.config.as_deref())?,
        _ => Settings::default(),
    };
    run_command_with(&settings, cli, out)
}

/// Execute the parsed command with already loaded `settings`.
pub fn run_command_with<W: Write>(settings: &Settings, cli: &Cli, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) | None => cmd_demo(settings, out),
        Some(Commands::Print { values }) => cmd_print(settings, values, out),
        Some(Commands::Get { hops, values }) => cmd_get(*hops, values, out),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(settings, out),
            ConfigCommands::Path => cmd_config_path(out),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
    }
}

/// Builds 10 -> 20 -> 30 -> 40 one link at a time, echoing the first two nodes
/// as they are created, then prints the list and the node three hops from the head.
#[instrument(level = "debug", skip_all)]
fn cmd_demo<W: Write>(settings: &Settings, out: &mut W) -> CliResult<()> {
    let mut arena = ChainArena::new();

    let node1 = arena.insert(10);
    write_node(out, &arena, node1)?;
    let node2 = arena.insert(20);
    write_node(out, &arena, node2)?;
    arena.set_next(node1, Some(node2))?;
    let node3 = arena.insert(30);
    arena.set_next(node2, Some(node3))?;
    let node4 = arena.insert(40);
    arena.set_next(node3, Some(node4))?;

    write_list(out, &arena, Some(node1), &settings.delimiters)?;

    if let Some(found) = arena.get(Some(node1), 3)? {
        write_node(out, &arena, found)?;
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings, out))]
fn cmd_print<W: Write>(settings: &Settings, values: &[String], out: &mut W) -> CliResult<()> {
    let mut arena = ChainArena::new();
    let head = arena.chain(values.iter().cloned());
    debug!("chain length: {}", arena.len_from(head));
    write_list(out, &arena, head, &settings.delimiters)?;
    Ok(())
}

/// Prints the node `hops` away; zero hops on an empty chain prints nothing.
#[instrument(level = "debug", skip(out))]
fn cmd_get<W: Write>(hops: i64, values: &[String], out: &mut W) -> CliResult<()> {
    let mut arena = ChainArena::new();
    let head = arena.chain(values.iter().cloned());
    match arena.get(head, hops)? {
        Some(found) => write_node(out, &arena, found)?,
        None => debug!("empty chain, no node to print"),
    }
    Ok(())
}

fn cmd_config_show<W: Write>(settings: &Settings, out: &mut W) -> CliResult<()> {
    let toml = settings.to_toml()?;
    write!(out, "{}", toml).io_context("write settings")?;
    Ok(())
}

fn cmd_config_path<W: Write>(out: &mut W) -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "cannot determine config directory".into(),
    })?;
    writeln!(out, "{}", path.display()).io_context("write config path")?;
    Ok(())
}
