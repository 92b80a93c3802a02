mod argsets;
mod command;
mod constants;
mod helpers;

use anyhow::{Result, anyhow};
use env_logger::Env;

use constants::{defaults, envvars};

const CMD_VALIDATE: &str = "validate";
const CMD_FMT: &str = "fmt";
const CMD_ROUNDTRIP: &str = "roundtrip";

const FLAG_COMPACT: &str = "--compact";

fn main() -> Result<()> {
    let dotenv_path = helpers::load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ValidateArgs {
            files: helpers::remaining_paths(args)?,
        }),
        Some(CMD_FMT) => {
            let compact = args.contains(FLAG_COMPACT) || !helpers::pretty_by_default();
            let file = args.free_from_str()?;
            helpers::finish_args(args)?;
            command::fmt(argsets::FmtArgs { file, compact })
        }
        Some(CMD_ROUNDTRIP) => {
            let file = args.free_from_str()?;
            helpers::finish_args(args)?;
            command::roundtrip(argsets::RoundtripArgs { file })
        }
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'fmt', 'roundtrip'"
        )),
    }
}
