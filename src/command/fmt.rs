use anyhow::{Context, Result};

use dashkinds::kinds::dashboard;

use crate::argsets::FmtArgs;
use crate::helpers::read_input;

pub fn fmt(args: FmtArgs) -> Result<()> {
    let raw = read_input(&args.file)?;
    let dash = dashboard::from_str(&raw)
        .with_context(|| format!("{} is not a valid dashboard", args.file.display()))?;
    let out = if args.compact {
        dashboard::to_string(&dash)?
    } else {
        dashboard::to_string_pretty(&dash)?
    };
    println!("{}", out);
    Ok(())
}
