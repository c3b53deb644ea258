//! A biome changer plugin. This gives operators a hand tool that repaints
//! the biome of a column of blocks around a clicked location. The tool's
//! whole state (selected biome, remaining uses, affected-area size) lives in
//! the item's own attached data, so it survives inventory moves, restarts,
//! and item duplication.
//!
//! The host server is out of scope. It drives this crate through the traits
//! in [`world`], [`player`] and [`trade`], and through the event handlers on
//! [`BiomeChanger`].

#[macro_use]
extern crate log;

pub mod biome;
pub mod command;
pub mod config;
pub mod event;
pub mod item;
pub mod particle;
pub mod player;
pub mod props;
pub mod trade;
pub mod wand;
pub mod world;

#[cfg(test)]
mod testutil;

use biome::Registry;
use config::Settings;
use item::{ItemRef, Stack};
use std::sync::Arc;
use wand::BiomeWand;

/// The plugin instance. The host creates one of these and routes events into
/// it; everything that needs settings or the biome registry gets them from
/// here, so there is no global state.
pub struct BiomeChanger {
  settings: Settings,
  biomes:   Arc<Registry>,
}

impl BiomeChanger {
  /// Creates the plugin instance. The host supplies its biome registry.
  pub fn new(settings: Settings, biomes: Arc<Registry>) -> Self {
    BiomeChanger { settings, biomes }
  }

  /// Loads settings from disk, starts the logger, and creates the plugin.
  pub fn load(config_path: &str, biomes: Arc<Registry>) -> Self {
    let settings = Settings::load(config_path);
    bc_common::init_with_level("biome_changer", settings.log_level());
    BiomeChanger::new(settings, biomes)
  }

  pub fn settings(&self) -> &Settings { &self.settings }
  pub fn biomes(&self) -> &Arc<Registry> { &self.biomes }

  /// Reads a tool out of the given item. See [`BiomeWand::from_item`].
  pub fn wand(&self, item: &ItemRef) -> Option<BiomeWand> {
    BiomeWand::from_item(item, &self.biomes)
  }
  /// Builds a fresh tool item. See [`BiomeWand::new_item`].
  pub fn new_wand_item(&self) -> Stack { BiomeWand::new_item(&self.biomes) }
}
