use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod calc_command;
mod console;
mod datetime;
mod demo_command;
mod duration;
mod error;
mod interactive_command;
mod logger;
mod timestamp;

use calc_command::{CalcArgs, CalcCommand};
use console::ConsoleText;
use datetime::SystemClock;
use demo_command::DemoCommand;
use interactive_command::InteractiveCommand;

/// 2つの時刻の間の経過時間を日、時間、分で表示するCLIアプリケーション。
///
/// サブコマンドを省略した場合は、組み込みの例を表示した後に対話入力を受け付ける。
///
/// # Examples
/// ```
/// $ cargo run
/// $ cargo run -- calc --start "2025-09-01 14:30" --end "2025-09-07 22:00"
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        short = 'v',
        long = "verbose",
        global = true,
        parse(from_occurrences),
        help = "Increases log verbosity (-v for info, -vv for debug)"
    )]
    verbose: u64,

    #[clap(subcommand)]
    subcommand: Option<SubCommands>,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Shows the built-in example calculations
    Demo,
    /// Reads the start and end times from standard input
    Interactive,
    /// Calculates the time between the given times
    Calc(CalcArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let clock = SystemClock;
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut presenter = ConsoleText::new(&mut writer);

    match args.subcommand {
        Some(SubCommands::Demo) => DemoCommand::new(&clock).run(&mut presenter)?,
        Some(SubCommands::Interactive) => {
            InteractiveCommand::new(&clock).run(&mut reader, &mut presenter)?
        }
        Some(SubCommands::Calc(calc)) => CalcCommand::new(&clock).run(calc, &mut presenter)?,
        None => {
            DemoCommand::new(&clock).run(&mut presenter)?;
            InteractiveCommand::new(&clock).run(&mut reader, &mut presenter)?;
        }
    }

    Ok(())
}
