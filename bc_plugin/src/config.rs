use log::LevelFilter;
use serde_derive::Deserialize;

/// Settings for the plugin, loaded from `biome_changer.toml`. Every field
/// has a default, so a missing file just means default behavior. The tool's
/// own schema (starting uses, radii, costs) is fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
  /// The level the plugin starts the logger at.
  pub log_level:    String,
  /// A new wandering trader sells the tool with probability 1 in this.
  /// `0` disables the offer.
  pub trade_chance: u32,
}

impl Default for Settings {
  fn default() -> Self { Settings { log_level: "info".into(), trade_chance: 7 } }
}

impl Settings {
  /// Loads settings from the given path. The compiled-in default config is
  /// written next to it, for reference.
  pub fn load(path: &str) -> Settings {
    bc_common::config::load(path, "biome_changer-default.toml", include_str!("default.toml"))
  }

  /// The configured log level. Unknown names fall back to `info`.
  pub fn log_level(&self) -> LevelFilter {
    match self.log_level.parse() {
      Ok(level) => level,
      Err(_) => {
        warn!("unknown log level `{}`, using `info`", self.log_level);
        LevelFilter::Info
      }
    }
  }
}
