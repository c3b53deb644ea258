//! The give command. The host owns command parsing and registration; it
//! calls in here once it has resolved who ran the command.

use crate::{player::Player, wand::BiomeWand, BiomeChanger};
use bc_common::util::{chat::Color, Chat};

impl BiomeChanger {
  /// Called by the host when a player runs the give command. Operators get
  /// a fresh tool; everyone else gets told off.
  pub fn on_give_command(&self, player: &mut dyn Player) {
    if !player.is_op() {
      player.send_hotbar(Chat::colored("You have to be op to use this command", Color::Red));
      return;
    }
    player.give_item(BiomeWand::new_item(self.biomes()));
    info!("gave a biome changer to {}", player.username());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{biome::Registry, config::Settings, testutil::TestPlayer};
  use pretty_assertions::assert_eq;
  use std::sync::Arc;

  fn plugin() -> BiomeChanger {
    BiomeChanger::new(Settings::default(), Arc::new(Registry::vanilla()))
  }

  #[test]
  fn test_requires_op() {
    let plugin = plugin();
    let mut player = TestPlayer::new();
    plugin.on_give_command(&mut player);
    assert!(player.given.is_empty());
    assert_eq!(player.last_message(), Some("You have to be op to use this command".into()));
  }

  #[test]
  fn test_gives_a_working_tool() {
    let plugin = plugin();
    let mut player = TestPlayer::new();
    player.op = true;
    plugin.on_give_command(&mut player);

    assert_eq!(player.given.len(), 1);
    assert_eq!(player.last_message(), None);
    let item = crate::item::ItemRef::new(player.given[0].clone());
    assert!(plugin.wand(&item).is_some());
  }
}
