mod alarm_cmd;
mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod session;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{AlarmCommand, Cli, Command};
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    let state_path = cli.state.unwrap_or_else(|| config.state.clone());
    debug!(config = %cli.config.display(), state = %state_path.display(), "resolved paths");

    let mut session = match cli.command {
        Command::Reset => Session::reset(&state_path, &config)?,
        _ => Session::open(&state_path, &config)?,
    };
    let calendar = &mut session.calendar;

    // Read-only commands return early without touching the state file.
    match cli.command {
        Command::Show(args) if args.month => {
            println!("{}", date_cmd::current_month(calendar)?);
            return Ok(());
        }
        Command::Show(args) => {
            println!("{}", date_cmd::show(calendar, args.format.as_deref())?);
            return Ok(());
        }
        Command::Months => {
            print_lines(date_cmd::months(calendar)?);
            return Ok(());
        }
        Command::Alarm(AlarmCommand::List) => {
            print_lines(alarm_cmd::list(calendar)?);
            return Ok(());
        }
        Command::Next => print_lines(date_cmd::advance(calendar, 1)?),
        Command::Prev => print_lines(date_cmd::advance(calendar, -1)?),
        Command::Add(args) => print_lines(date_cmd::advance(calendar, args.days)?),
        Command::Set(args) => println!("{}", date_cmd::set(calendar, &args.date)?),
        Command::Reset => println!("{}", date_cmd::show(calendar, None)?),
        Command::Alarm(AlarmCommand::Add(args)) => alarm_cmd::add(calendar, args)?,
        Command::Alarm(AlarmCommand::Edit(args)) => alarm_cmd::edit(calendar, args)?,
        Command::Alarm(AlarmCommand::Remove(args)) => alarm_cmd::remove(calendar, &args.name)?,
        Command::Alarm(AlarmCommand::Rename(args)) => {
            alarm_cmd::rename(calendar, &args.old_name, &args.new_name)?
        }
    }

    session.save()
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
