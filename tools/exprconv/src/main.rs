#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Conversion {
    /// Infix to postfix.
    Postfix,
    /// Infix to prefix.
    Prefix,
    /// Postfix to prefix.
    PostfixToPrefix,
}

/// Converts arithmetic expressions between infix, postfix and prefix notation.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Expression of single-character operands, e.g. "(a+b)*c".
    expression: String,

    #[arg(long, value_enum, default_value_t = Conversion::Postfix)]
    to: Conversion,

    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to set up logging: {e}");
    }

    info!("converting {:?} with {:?}", args.expression, args.to);
    let converted = match args.to {
        Conversion::Postfix => exprstack::infix_to_postfix(&args.expression),
        Conversion::Prefix => exprstack::infix_to_prefix(&args.expression),
        Conversion::PostfixToPrefix => exprstack::postfix_to_prefix(&args.expression),
    };

    match converted {
        Ok(expression) => {
            println!("{expression}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}: {e}", args.expression);
            ExitCode::FAILURE
        }
    }
}
