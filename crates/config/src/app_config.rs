// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "pds.config.yaml";
pub const ENV_PREFIX: &str = "PDS_";

const CONFIG_KEYS: &[&str] = &["order", "output", "deck_output", "pause"];

/// Settings for a run of the tool
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct PdsConfig {
    /// Order to build when none is passed on the command line. Unset means prompt.
    order: Option<i64>,
    /// File the incidence matrix is written to
    output: PathBuf,
    /// File the card deck is written to
    deck_output: PathBuf,
    /// Wait for Enter before exiting
    pause: bool,
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for PdsConfig {
    fn default() -> Self {
        Self {
            order: None,
            output: PathBuf::from("matrix.csv"),
            deck_output: PathBuf::from("cards.json"),
            pause: true,
            config_file: None,
        }
    }
}

impl PdsConfig {
    pub fn order(&self) -> Option<i64> {
        self.order
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    pub fn deck_output(&self) -> &PathBuf {
        &self.deck_output
    }

    pub fn pause(&self) -> bool {
        self.pause
    }

    /// The file the config was read from, if any
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,
}

/// Load the config, layering defaults, the config file, `PDS_*` environment
/// variables and cli overrides, later layers winning.
///
/// `cli_file` must exist when given; without it the nearest `pds.config.yaml`
/// above the working directory is used if there is one.
pub fn load_config(cli_file: Option<PathBuf>, overrides: CliOverrides) -> Result<PdsConfig> {
    let resolved_config_path = resolve_config_path(
        find_in_parent,       // finding strategy
        env::current_dir()?,  // cwd
        DEFAULT_CONFIG_NAME,  // pds.config.yaml
        cli_file,             // config file passed on the cli
    );

    let mut figment = Figment::from(Serialized::defaults(PdsConfig::default()));

    if let Some(path) = &resolved_config_path {
        let loaded_yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Configuration file not found: {}", path.display()))?;
        figment = figment.merge(Yaml::string(&loaded_yaml));
    }

    let mut config: PdsConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(CONFIG_KEYS))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = resolved_config_path;
    debug!(?config, "Configuration loaded");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config =
                load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;

            assert_eq!(config.order(), None);
            assert_eq!(config.output(), &PathBuf::from("matrix.csv"));
            assert_eq!(config.deck_output(), &PathBuf::from("cards.json"));
            assert!(config.pause());
            assert_eq!(config.config_file(), None);

            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some(PathBuf::from("/nope")), CliOverrides::default()) else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<std::io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        Ok(())
    }

    #[test]
    fn test_file_found_in_cwd() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
order: 7
output: "planes/seven.csv"
pause: false
"#,
            )?;

            let config =
                load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;

            assert_eq!(config.order(), Some(7));
            assert_eq!(config.output(), &PathBuf::from("planes/seven.csv"));
            assert_eq!(config.deck_output(), &PathBuf::from("cards.json"));
            assert!(!config.pause());
            assert!(config
                .config_file()
                .is_some_and(|path| path.ends_with(DEFAULT_CONFIG_NAME)));

            Ok(())
        });
    }

    #[test]
    fn test_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.yaml",
                r#"
order: 3
output: "from-file.csv"
deck_output: "from-file.json"
"#,
            )?;
            jail.set_env("PDS_ORDER", "5");
            jail.set_env("PDS_DECK_OUTPUT", "from-env.json");
            jail.set_env("PDS_UNRELATED", "ignored");

            let config = load_config(
                Some(PathBuf::from("custom.yaml")),
                CliOverrides {
                    order: Some(9),
                    pause: Some(false),
                    ..Default::default()
                },
            )
            .map_err(|e| e.to_string())?;

            assert_eq!(config.order(), Some(9));
            assert_eq!(config.output(), &PathBuf::from("from-file.csv"));
            assert_eq!(config.deck_output(), &PathBuf::from("from-env.json"));
            assert!(!config.pause());

            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_in_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "colour: blue\n")?;

            let result = load_config(None, CliOverrides::default());
            assert!(result.is_err());

            Ok(())
        });
    }
}
