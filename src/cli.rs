use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// True when --config was passed; a missing default file is tolerated,
    /// a missing explicit one is not.
    pub config_explicit: bool,
    /// Session-scoped country override; not persisted.
    pub country: Option<String>,
}

pub fn parse_args() -> Result<CliArgs> {
    parse(env::args().skip(1))
}

fn parse(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut config_path = None;
    let mut country = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--country" => {
                country = Some(
                    args.next()
                        .ok_or_else(|| anyhow!("missing value for --country"))?,
                );
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {other}. usage: counsel [--config <path>] [--country <code>]"
                ));
            }
        }
    }

    Ok(CliArgs {
        config_explicit: config_path.is_some(),
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./counsel.jsonc")),
        country,
    })
}
