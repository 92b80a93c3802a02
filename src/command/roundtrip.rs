use anyhow::{Context, Result, anyhow};

use dashkinds::roundtrip as fidelity;

use crate::argsets::RoundtripArgs;
use crate::helpers::read_input;

pub fn roundtrip(args: RoundtripArgs) -> Result<()> {
    let raw = read_input(&args.file)?;
    let result = fidelity::check(&raw)
        .with_context(|| format!("{} is not a valid dashboard", args.file.display()))?;

    if result.is_faithful() {
        println!("{}: faithful", args.file.display());
        return Ok(());
    }
    for difference in &result.differences {
        println!("{}", difference);
    }
    Err(anyhow!(
        "{}: {} difference(s) after round trip",
        args.file.display(),
        result.differences.len()
    ))
}
