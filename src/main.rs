use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use proplog::{
    command::{Action, run_formula},
    definitions::{build_environment, parse_definition},
    session::run_session,
};

/// proplog evaluates and pretty-prints propositional logic formulas.
///
/// Without a formula, reads a session from standard input: atom definitions
/// such as `rain = 1`, a blank line, then one formula per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Defines an atom, as in `rain=1`. May be repeated.
    #[arg(short, long = "define", value_name = "NAME=1|0", value_parser = parse_definition)]
    defines: Vec<(String, bool)>,

    /// Reads atom definitions from a file, one `name = 1|0` per line.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Prints the canonical rendering of the formula instead of its value.
    #[arg(short, long)]
    render: bool,

    /// Prints the truth table of the formula instead of its value.
    #[arg(short, long, conflicts_with = "render")]
    table: bool,

    /// The formula to evaluate, such as `!a & (b | c)`.
    formula: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let Some(source) = &args.formula else {
        let stdout = BufWriter::new(io::stdout().lock());
        return match run_session(io::stdin().lock(), stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to run the session: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let action = if args.render {
        Action::Render
    } else if args.table {
        Action::Table
    } else {
        match build_environment(args.file.as_deref(), &args.defines) {
            Ok(env) => Action::Evaluate(env),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    };

    match run_formula(source, &action, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
