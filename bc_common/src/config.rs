//! Config loading. A config is a TOML file deserialized into a settings
//! struct with serde. Every field needs a default, so that a missing or
//! outdated file still produces a working configuration.

use serde::de::DeserializeOwned;
use std::fs;

/// Parses the given TOML source into a settings struct.
pub fn parse<T: DeserializeOwned>(src: &str) -> Result<T, toml::de::Error> { toml::from_str(src) }

/// Loads a config for the given path. The path is a runtime path to load the
/// config file. The default source should be loaded with `include_str!`, and
/// is used whenever the file at `path` is missing or invalid. When this is
/// called, the default source will also be written to `default_path`. This
/// is for users, so they can view the default config as a reference. If that
/// file cannot be written, a warning will be printed.
pub fn load<T: DeserializeOwned>(path: &str, default_path: &str, default_src: &str) -> T {
  fs::write(default_path, default_src).unwrap_or_else(|e| {
    warn!("could not write default configuration to disk at `{default_path}`: {e}");
  });
  match fs::read_to_string(path) {
    Ok(src) => match parse(&src) {
      Ok(config) => config,
      Err(e) => {
        warn!("invalid configuration at `{path}`: {e}");
        warn!("falling back to the default configuration");
        parse_default(default_src)
      }
    },
    Err(_) => parse_default(default_src),
  }
}

fn parse_default<T: DeserializeOwned>(default_src: &str) -> T {
  // The default source is compiled in, so it must parse.
  parse(default_src).unwrap()
}
