// SPDX-License-Identifier: MPL-2.0
use dorm_notices::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
dorm_notices - toast notifications and route banners demo

USAGE:
  dorm_notices [OPTIONS]

OPTIONS:
  --route <PATH>     Page to open first (default: /)
  --role <ROLE>      Signed-in role: student, supervisor or admin
  --config <FILE>    Settings file to use instead of the per-user one
  -h, --help         Print this help
";

/// Command line outcome: launch with flags, or print the help text.
#[derive(Debug)]
enum Command {
    Run(Flags),
    Help,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Command, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let flags = Flags {
        route: args.opt_value_from_str("--route")?,
        role: args.opt_value_from_str("--role")?,
        config_path: args.opt_value_from_str("--config")?,
    };

    let rest = args.finish();
    if let Some(unexpected) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", unexpected.to_string_lossy()),
        });
    }

    Ok(Command::Run(flags))
}

fn main() -> ExitCode {
    match parse_args(pico_args::Arguments::from_env()) {
        Ok(Command::Help) => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Ok(Command::Run(flags)) => match app::run(flags) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {err}\n");
            eprint!("{HELP}");
            ExitCode::from(2)
        }
    }
}
