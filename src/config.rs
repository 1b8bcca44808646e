use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Weekday;
use serde::Deserialize;
use termion::event::Key;

use crate::cmds::Cmd;
use crate::error::{Error, ErrorKind, Result};

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "KALENDS_CONFIG_FILE";

pub const DEFAULT_WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("kalends").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".kalends.toml"));
    }

    locations
}

/// On-disk config surface. Everything is optional; missing fields fall
/// back to the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    first_weekday: Option<String>,
    weekday_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub first_weekday: Weekday,
    pub weekday_labels: Vec<String>,
    pub key_map: KeyMap,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            first_weekday: Weekday::Mon,
            weekday_labels: DEFAULT_WEEKDAY_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            key_map: HashMap::new(),
            tick_rate: Duration::from_millis(500),
        };

        config.key_map.insert(Key::Char('h'), Cmd::PrevDay);
        config.key_map.insert(Key::Char('l'), Cmd::NextDay);
        config.key_map.insert(Key::Char('k'), Cmd::PrevWeek);
        config.key_map.insert(Key::Char('j'), Cmd::NextWeek);
        config.key_map.insert(Key::Left, Cmd::PrevDay);
        config.key_map.insert(Key::Right, Cmd::NextDay);
        config.key_map.insert(Key::Up, Cmd::PrevWeek);
        config.key_map.insert(Key::Down, Cmd::NextWeek);
        config.key_map.insert(Key::Char('p'), Cmd::PrevMonth);
        config.key_map.insert(Key::Char('n'), Cmd::NextMonth);
        config.key_map.insert(Key::Char('t'), Cmd::Today);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        config
    }
}

impl Config {
    fn from_toml(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(name) = file.first_weekday {
            config.first_weekday = name.parse::<Weekday>().map_err(|_| {
                Error::new(ErrorKind::Config, &format!("'{}' is not a weekday", name))
            })?;
        }

        if let Some(labels) = file.weekday_labels {
            if labels.len() != 7 {
                return Err(Error::new(
                    ErrorKind::Config,
                    &format!("expected 7 weekday labels, got {}", labels.len()),
                ));
            }
            config.weekday_labels = labels;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        Config::from_toml(&fs::read_to_string(path)?)
    }

    /// Offset of the configured first weekday from Monday, in 0..=6.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_weekday.num_days_from_monday()
    }
}

/// Loads an explicitly given config file, or the first one found in the
/// usual locations, or the defaults when there is none.
pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            log::info!("loading config from {}", location.display());
            return Config::from_file(&location);
        }
    }

    log::debug!("no config file found, using defaults");
    Ok(Config::default())
}
