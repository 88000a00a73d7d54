use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};

use ocho::{Program, RunState};

/// Exit status when the running program reaches an instruction the CPU
/// cannot execute.
const EXIT_BAD_INSTRUCTION: i32 = 1;
/// Exit status when the program file does not exist.
const EXIT_FILE_MISSING: i32 = 2;

/// Ocho is an emulator toolchain for the LS-8 8-bit computer.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Quickly provide a `.ls8` file to run
    path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a `.ls8` machine-code file and print program output to the terminal
    Run {
        /// `.ls8` file to run
        name: PathBuf,
        /// Print an execution trace to stderr, one line per step
        #[arg(short, long)]
        trace: bool,
    },
    /// Load a `.ls8` file without running it, reporting any encoding errors
    Check {
        /// File to check
        name: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    use MsgColor::*;
    let args = Args::parse();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new() //
                .context_lines(ocho::DIAGNOSTIC_CONTEXT_LINES)
                .build(),
        )
    }))?;

    match args.command {
        Some(Command::Run { name, trace }) => run(&name, trace),
        Some(Command::Check { name }) => {
            file_message(Green, "Checking", &name);
            let src = read_source(&name)?;
            let _ = Program::parse(&src)?;
            message(Green, "Success", "no errors found!");
            Ok(())
        }
        None => {
            if let Some(path) = args.path {
                run(&path, false)
            } else {
                println!("\n~ ocho v{VERSION} ~");
                println!("{SHORT_INFO}");
                Ok(())
            }
        }
    }
}

enum MsgColor {
    Green,
    Cyan,
    Red,
}

fn file_message(color: MsgColor, left: &str, right: &Path) {
    let right = format!("target {}", right.display());
    message(color, left, &right);
}

fn message<S>(color: MsgColor, left: S, right: S)
where
    S: Colorize + std::fmt::Display,
{
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Red => left.red(),
    };
    eprintln!("{left:>12} {right}");
}

fn run(name: &Path, trace: bool) -> Result<()> {
    file_message(MsgColor::Green, "Loading", name);
    let src = read_source(name)?;
    let program = Program::parse(&src)?;

    let mut state = RunState::new(&program);
    state.set_trace(trace);

    message(MsgColor::Green, "Running", "loaded image");
    match state.run() {
        Ok(()) => {
            message(MsgColor::Cyan, "Halted", "clean exit");
            file_message(MsgColor::Green, "Completed", name);
            Ok(())
        }
        Err(err) => {
            message(MsgColor::Red, "Error", &err.to_string());
            process::exit(EXIT_BAD_INSTRUCTION);
        }
    }
}

/// Read program source, with a distinguished exit status when the file is
/// absent.
fn read_source(name: &Path) -> Result<String> {
    match fs::read_to_string(name) {
        Ok(src) => Ok(src),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            message(
                MsgColor::Red,
                "Error",
                &format!("{} not found", name.display()),
            );
            process::exit(EXIT_FILE_MISSING);
        }
        Err(err) => Err(err).into_diagnostic(),
    }
}

const SHORT_INFO: &str = r"
Welcome to ocho, an emulator toolchain for the LS-8 8-bit computer.
Please use `-h` or `--help` to access the usage instructions and documentation.
";

const VERSION: &str = env!("CARGO_PKG_VERSION");
