use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keeper of a fictional campaign calendar.
#[derive(Parser)]
#[command(
    name = "dndate",
    version,
    about = "Track the date of a fictional calendar and its alarms"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "dndate.toml")]
    pub config: PathBuf,

    /// Override the state file path from config.
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current date.
    Show(ShowArgs),
    /// Advance the date by one day.
    Next,
    /// Move the date back by one day.
    Prev,
    /// Move the date by a number of days.
    Add(AddArgs),
    /// Set the current date.
    Set(SetArgs),
    /// Discard the stored calendar and re-seed it from the configuration.
    Reset,
    /// List the month table.
    Months,
    /// Manage alarms.
    #[command(subcommand)]
    Alarm(AlarmCommand),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Template to use instead of the calendar's format (e.g. "DD Month YYYY").
    #[arg(short, long, conflicts_with = "month")]
    pub format: Option<String>,
    /// Print the name of the current month instead of the date.
    #[arg(short, long)]
    pub month: bool,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Number of days; negative values move backwards.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `set` subcommand.
#[derive(clap::Args)]
pub struct SetArgs {
    /// New date as YYYY-DOY, YYYY-MM-DD or YYYY-Month-DD.
    pub date: String,
}

/// Alarm subcommands.
#[derive(Subcommand)]
pub enum AlarmCommand {
    /// Add a new alarm.
    Add(AlarmAddArgs),
    /// Change an existing alarm.
    Edit(AlarmEditArgs),
    /// Delete an alarm.
    Remove(AlarmNameArgs),
    /// Rename an alarm.
    Rename(AlarmRenameArgs),
    /// List all alarms.
    List,
}

/// Arguments for `alarm add`.
#[derive(clap::Args)]
pub struct AlarmAddArgs {
    /// Unique alarm name.
    pub name: String,
    /// Alarm date as YYYY-DOY, YYYY-MM-DD or YYYY-Month-DD.
    pub date: String,
    /// Message shown when the alarm goes off.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for `alarm edit`.
#[derive(clap::Args)]
pub struct AlarmEditArgs {
    /// Name of the alarm to change.
    pub name: String,
    /// New name.
    #[arg(long = "name")]
    pub new_name: Option<String>,
    /// New date.
    #[arg(short, long)]
    pub date: Option<String>,
    /// New message.
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments naming a single alarm.
#[derive(clap::Args)]
pub struct AlarmNameArgs {
    /// Alarm name.
    pub name: String,
}

/// Arguments for `alarm rename`.
#[derive(clap::Args)]
pub struct AlarmRenameArgs {
    /// Current name.
    pub old_name: String,
    /// New name.
    pub new_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_day_counts() {
        let cli = Cli::try_parse_from(["dndate", "add", "-30"]).unwrap();
        match cli.command {
            Command::Add(args) => assert_eq!(args.days, -30),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn rejects_non_integer_day_counts() {
        assert!(Cli::try_parse_from(["dndate", "add", "three"]).is_err());
        assert!(Cli::try_parse_from(["dndate", "add", "1.5"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dndate", "show", "-vv", "--state", "s.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.state, Some(PathBuf::from("s.json")));
        assert_eq!(cli.config, PathBuf::from("dndate.toml"));
    }

    #[test]
    fn alarm_add_joins_message_words() {
        let cli =
            Cli::try_parse_from(["dndate", "alarm", "add", "feast", "1492-Mar-04", "eat", "well"])
                .unwrap();
        match cli.command {
            Command::Alarm(AlarmCommand::Add(args)) => {
                assert_eq!(args.name, "feast");
                assert_eq!(args.message, vec!["eat", "well"]);
            }
            _ => panic!("expected alarm add"),
        }
    }

    #[test]
    fn alarm_edit_new_name_flag() {
        let cli = Cli::try_parse_from(["dndate", "alarm", "edit", "feast", "--name", "fast"]).unwrap();
        match cli.command {
            Command::Alarm(AlarmCommand::Edit(args)) => {
                assert_eq!(args.name, "feast");
                assert_eq!(args.new_name.as_deref(), Some("fast"));
                assert!(args.date.is_none());
            }
            _ => panic!("expected alarm edit"),
        }
    }

    #[test]
    fn show_month_flag() {
        let cli = Cli::try_parse_from(["dndate", "show", "--month"]).unwrap();
        match cli.command {
            Command::Show(args) => assert!(args.month && args.format.is_none()),
            _ => panic!("expected show"),
        }
        assert!(Cli::try_parse_from(["dndate", "show", "-m", "-f", "YYYY"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
