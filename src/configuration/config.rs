#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;
use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

fn parse_timeout(millis: &str) -> Option<Duration> {
    let millis = millis.parse::<u64>().unwrap_or(0);
    if millis == 0 {
        return None;
    }

    return Some(Duration::from_millis(millis));
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    Model,
    #[strum(serialize = "openai-token")]
    OpenAiToken,
    #[strum(serialize = "openai-url")]
    OpenAiURL,
    Temperature,
    Timeout,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_default()
            .join("interview-buddy/config.toml");

        let res = match key {
            ConfigKey::Model => "gpt-3.5-turbo",
            ConfigKey::OpenAiToken => "",
            ConfigKey::OpenAiURL => "https://api.openai.com",
            ConfigKey::Temperature => "0",
            ConfigKey::Timeout => "60000",
            ConfigKey::Username => "You",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    /// Per call completion timeout. `None` when set to 0.
    pub fn timeout() -> Option<Duration> {
        return parse_timeout(&Config::get(ConfigKey::Timeout));
    }

    fn validate(values: &HashMap<ConfigKey, String>) -> Result<()> {
        let get = |key: ConfigKey| return values.get(&key).cloned().unwrap_or_default();

        let temperature = get(ConfigKey::Temperature);
        match temperature.parse::<f32>() {
            Ok(val) if (0.0..=2.0).contains(&val) => {}
            _ => bail!(
                "Invalid value for '{}': {temperature}. Expected a number between 0 and 2",
                ConfigKey::Temperature
            ),
        }

        let timeout = get(ConfigKey::Timeout);
        if timeout.parse::<u64>().is_err() {
            bail!(
                "Invalid value for '{}': {timeout}. Expected a number of milliseconds",
                ConfigKey::Timeout
            );
        }

        if get(ConfigKey::Model).is_empty() {
            bail!("A model must be set with '{}'", ConfigKey::Model);
        }

        return Ok(());
    }

    /// Resolves every key from defaults, then the config file, then flags and
    /// environment, without touching the stored config.
    pub async fn resolve(
        clap_arg_matches: &[&ArgMatches],
    ) -> Result<HashMap<ConfigKey, String>> {
        let mut values = ConfigKey::iter()
            .map(|key| return (key, Config::default(key)))
            .collect::<HashMap<ConfigKey, String>>();

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches {
            if let Some(arg_config_file) =
                matches.get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(&config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        values.insert(key, val_int.to_string());
                    } else if let Some(val_float) = val.as_float() {
                        values.insert(key, val_float.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        values.insert(key, val_str.to_string());
                    } else {
                        bail!(format!("config.toml has an invalid value for key '{key}'"));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    values.insert(key, val.to_string());
                }
            }
        }

        Config::validate(&values).map_err(|err| {
            return err.context(format!("Failed to load configuration from {config_file}"));
        })?;

        return Ok(values);
    }

    /// Stores the resolved config. Nothing is stored unless the result is
    /// valid.
    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let values = Config::resolve(&clap_arg_matches).await?;
        for (key, val) in values.iter() {
            Config::set(*key, val);
        }

        tracing::debug!(
            model = Config::get(ConfigKey::Model),
            openai_url = Config::get(ConfigKey::OpenAiURL),
            temperature = Config::get(ConfigKey::Temperature),
            timeout = Config::get(ConfigKey::Timeout),
            username = Config::get(ConfigKey::Username),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let description = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    .and_then(|arg| return arg.get_help())
                    .map(|help| {
                        return help
                            .to_string()
                            .split("[default:")
                            .next()
                            .unwrap_or_default()
                            .trim()
                            .to_string();
                    })
                    .unwrap_or_default();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<f64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
