//! Configuration: command-line arguments, `.env` config file, environment.
//!
//! Resolution order for every option is command line, then config file, then
//! process environment, then default. The resolved [`Config`] is built once and
//! passed by reference; nothing else reads the environment.

use crate::error::{PipelineError, Result};
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LEAGUE_ID_KEY: &str = "SLEEPER_LEAGUE_ID";
pub const PORT_KEY: &str = "PORT";
pub const HOST_KEY: &str = "HOST";
pub const OUTPUT_DIR_KEY: &str = "SLEEPER_OUTPUT_DIR";
pub const API_BASE_KEY: &str = "SLEEPER_API_BASE";

pub const DEFAULT_CONFIG_FILE: &str = ".env";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_BASE: &str = "https://api.sleeper.app/v1";
/// Pause after every request to stay under the API rate limit.
pub const REQUEST_DELAY: Duration = Duration::from_millis(100);
/// Ports tried when the preferred one is taken, including the preferred one.
pub const PORT_ATTEMPTS: u16 = 10;

pub const USAGE: &str = "\
Usage: league [LEAGUE_ID] [OPTIONS]

Fetches a Sleeper league and writes JSON snapshots plus a web view model.

Options:
  --port N         Port for --serve (default 8000, scans upward when taken)
  --host HOST      Bind address for --serve (default 0.0.0.0)
  --out DIR        Output directory (default .)
  --config FILE    Config file (default .env)
  --no-stats       Skip the unrostered player season stats
  --serve          Serve the output directory after fetching
  -h, --help       Show this help

The league id may also come from SLEEPER_LEAGUE_ID in the config file or environment.";

/// Parsed command line. Every option is optional here; [`Config::resolve`] fills the gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliArgs {
    pub league_id: Option<String>,
    pub port: Option<u16>,
    pub host: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub no_stats: bool,
    pub serve: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "--serve" => cli.serve = true,
                "--no-stats" => cli.no_stats = true,
                "--port" => {
                    let value = flag_value(&mut args, "--port")?;
                    cli.port = Some(parse_port(&value)?);
                }
                "--host" => cli.host = Some(flag_value(&mut args, "--host")?),
                "--out" => cli.out_dir = Some(PathBuf::from(flag_value(&mut args, "--out")?)),
                "--config" => cli.config_file = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
                flag if flag.starts_with('-') => {
                    return Err(PipelineError::Configuration(format!("unknown option {flag}")));
                }
                _ => {
                    if cli.league_id.is_some() {
                        return Err(PipelineError::Configuration(format!("unexpected argument {arg}")));
                    }
                    cli.league_id = Some(arg);
                }
            }
        }
        Ok(cli)
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| PipelineError::Configuration(format!("{flag} needs a value")))
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| PipelineError::Configuration(format!("invalid port {value:?}")))
}

/// Key/value pairs from a dotenv-style config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    values: HashMap<String, String>,
}

impl ConfigFile {
    /// Read a config file. A missing file is an empty config, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                log::debug!("No config file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(config_file_error(path, e)),
        };
        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| config_file_error(path, e))?;
            values.insert(key, value);
        }
        log::debug!("Read {} value(s) from {}", values.len(), path.display());
        Ok(Self { values })
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Non-blank value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

fn config_file_error(path: &Path, e: dotenvy::Error) -> PipelineError {
    PipelineError::Configuration(format!("cannot read {}: {e}", path.display()))
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub league_id: String,
    pub port: u16,
    pub host: String,
    pub out_dir: PathBuf,
    pub api_base: String,
    pub request_delay: Duration,
    pub fetch_stats: bool,
    pub serve: bool,
}

impl Config {
    /// Resolve against the real environment and the real network stack.
    pub fn from_cli(cli: &CliArgs) -> Result<Self> {
        let path = cli
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let file = ConfigFile::load(&path)?;
        Self::resolve(cli, &file, |key| std::env::var(key).ok(), port_is_free)
    }

    /// Resolve from explicit sources. `env` looks up a process variable, `port_free`
    /// reports whether `(host, port)` can be bound and is consulted only with `--serve`.
    pub fn resolve<E, P>(cli: &CliArgs, file: &ConfigFile, env: E, port_free: P) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        P: Fn(&str, u16) -> bool,
    {
        let lookup = |key: &str| -> Option<String> {
            file.get(key)
                .map(str::to_string)
                .or_else(|| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
        };

        let league_id = cli
            .league_id
            .clone()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .or_else(|| lookup(LEAGUE_ID_KEY))
            .ok_or_else(|| {
                PipelineError::Configuration(format!(
                    "no league id: pass it as the first argument or set {LEAGUE_ID_KEY} in {DEFAULT_CONFIG_FILE}"
                ))
            })?;

        let preferred = match cli.port {
            Some(port) => port,
            None => lookup(PORT_KEY).as_deref().map(parse_port).transpose()?.unwrap_or(DEFAULT_PORT),
        };
        let host = cli
            .host
            .clone()
            .or_else(|| lookup(HOST_KEY))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        // Only a serving run needs a free port.
        let port = if cli.serve {
            let port = find_free_port(preferred, PORT_ATTEMPTS, |port| port_free(host.as_str(), port))?;
            if port != preferred {
                log::info!("Port {preferred} is taken, using {port}");
            }
            port
        } else {
            preferred
        };

        Ok(Self {
            league_id,
            port,
            host,
            out_dir: cli
                .out_dir
                .clone()
                .or_else(|| lookup(OUTPUT_DIR_KEY).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            api_base: lookup(API_BASE_KEY)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_delay: REQUEST_DELAY,
            fetch_stats: !cli.no_stats,
            serve: cli.serve,
        })
    }
}

/// First port in `first..first+attempts` for which `is_free` holds.
pub fn find_free_port(first: u16, attempts: u16, is_free: impl Fn(u16) -> bool) -> Result<u16> {
    let last = first.saturating_add(attempts.saturating_sub(1));
    (first..=last)
        .find(|&port| is_free(port))
        .ok_or(PipelineError::PortExhausted { first, last })
}

/// True when a listener can bind `(host, port)` right now.
pub fn port_is_free(host: &str, port: u16) -> bool {
    TcpListener::bind((host, port)).is_ok()
}
