use anyhow::{Context, Result};

use dashkinds::kinds::dashboard;

use crate::argsets::ValidateArgs;
use crate::helpers::read_input;

pub fn validate(args: ValidateArgs) -> Result<()> {
    for path in &args.files {
        let raw = read_input(path)?;
        let dash = dashboard::from_str(&raw)
            .with_context(|| format!("{} is not a valid dashboard", path.display()))?;
        log::info!(
            "Validated {} (title: {:?}, {} panel(s))",
            path.display(),
            dash.title.as_deref().unwrap_or(""),
            dash.panels.as_ref().map_or(0, Vec::len)
        );
        println!("{}: ok", path.display());
    }
    Ok(())
}
