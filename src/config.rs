//! Configuration Management
//!
//! Values are read once, on first access, from (later sources win):
//! - `<config dir>/firord/config.toml`
//! - `./config.toml`
//! - `FIRORD_*` environment variables
//!
//! and can be overridden at runtime with [`set`].
use config::File;
use config::Source;
use config::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::level_filters::LevelFilter;

/// Get global configuration
pub fn config() -> Config {
    get_config().clone()
}

// helper to deal with poisoned Mutex
fn get_config() -> MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|poison| {
        warn!("config poisoned, restoring initial config");
        let mut c = poison.into_inner();
        *c = init_config();
        CONFIG.clear_poison();
        c
    })
}

/// Set config value
pub fn set<V: Into<Value>>(name: impl Into<String>, value: V) {
    get_config().set_value(name, value);
}

/// Get value from config
pub fn get_value(name: &str) -> Option<Value> {
    get_config().misc.get(name).cloned()
}

/// Try to parse value from config string
pub fn get<T: FromStr>(name: &str) -> Option<T> {
    get_config()
        .misc
        .get(name)
        .and_then(|v| v.clone().into_string().ok())
        .and_then(|v| v.parse::<T>().ok())
}

fn init_config() -> Config {
    let mut settings = ::config::Config::builder();

    // user config
    if let Some(mut path) = dirs::config_dir() {
        path.push("firord");
        path.push("config.toml");

        settings = settings.add_source(File::from(path).required(false));
    }

    // project config
    settings =
        settings.add_source(File::new("config.toml", config::FileFormat::Toml).required(false));

    // env config
    settings = settings.add_source(config::Environment::with_prefix("firord"));

    let mut c = Config::default();

    match settings.build() {
        Ok(settings) => match settings.collect() {
            Ok(config) => {
                for (k, v) in config {
                    c.set_value(k, v);
                }
            }
            Err(e) => warn!("error parsing config {e:?}"),
        },
        Err(e) => warn!("error reading config {e:?}"),
    }
    c
}

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(init_config()));

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
    /// Sample rate assumed by [`remezord`](crate::firdes::remezord) when none is given
    pub default_fsamp: f64,
    /// Taps added on top of the estimated order by the [`optfir`](crate::firdes::optfir) builders
    pub extra_taps: usize,
    misc: HashMap<String, Value>,
}

impl Config {
    fn set_value<V: Into<Value>>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            "log_level" => {
                if let Some(v) = config_parse::<LevelFilter>(&name, &value) {
                    self.log_level = v;
                }
            }
            "default_fsamp" => match config_parse::<f64>(&name, &value) {
                Some(v) if v.is_finite() && v > 0.0 => self.default_fsamp = v,
                Some(v) => warn!("ignoring non-positive default_fsamp {v}"),
                None => {}
            },
            "extra_taps" => {
                if let Some(v) = config_parse::<usize>(&name, &value) {
                    self.extra_taps = v;
                }
            }
            _ => {
                self.misc.insert(name, value);
            }
        }
    }
}

impl Default for Config {
    #[cfg(debug_assertions)]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::DEBUG,
            default_fsamp: 2.0,
            extra_taps: 2,
            misc: HashMap::new(),
        }
    }

    #[cfg(not(debug_assertions))]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::INFO,
            default_fsamp: 2.0,
            extra_taps: 2,
            misc: HashMap::new(),
        }
    }
}

fn config_parse<T: FromStr>(name: &str, v: &Value) -> Option<T> {
    let parsed = v
        .clone()
        .into_string()
        .ok()
        .and_then(|s| s.parse::<T>().ok());
    if parsed.is_none() {
        warn!("invalid config value {v:?} for {name}, keeping previous value");
    }
    parsed
}
