//! The interaction surface. The host calls [`BiomeChanger::on_interact`]
//! whenever a player right clicks while holding an item; everything the tool
//! does in play starts here.
//!
//! The click mapping matches how the tool is used in the field: sneaking and
//! clicking a block reads that block's biome into the tool, a plain click on
//! a block applies the tool there, and sneaking while clicking air switches
//! the size.

use crate::{
  item::Stack,
  particle::Particle,
  player::{Hand, Player},
  wand::BiomeWand,
  world::BiomeWorld,
  BiomeChanger,
};
use bc_common::{
  math::{FPos, Pos},
  util::{chat::Color, Chat},
};

/// What a right click hit.
#[derive(Debug, Clone, Copy)]
pub enum Click {
  Air,
  Block(Pos),
}

/// Whether an event handler consumed the event.
#[derive(Debug, Clone, Copy)]
pub enum EventFlow {
  Handled,
  Continue,
}

impl EventFlow {
  pub fn is_handled(&self) -> bool { matches!(self, EventFlow::Handled) }
  pub fn is_continue(&self) -> bool { matches!(self, EventFlow::Continue) }
}

impl BiomeChanger {
  /// Called by the host when a player right clicks while holding an item.
  /// Returns [`EventFlow::Continue`] when the held item isn't a working
  /// biome changer, so the host keeps processing the click as whatever it
  /// would otherwise be.
  pub fn on_interact(
    &self,
    world: &mut dyn BiomeWorld,
    player: &mut dyn Player,
    hand: Hand,
    click: Click,
  ) -> EventFlow {
    let item = match player.hand_item(hand) {
      Some(item) => item,
      None => return EventFlow::Continue,
    };
    let wand = match BiomeWand::from_item(&item, self.biomes()) {
      Some(wand) => wand,
      None => return EventFlow::Continue,
    };

    match (click, player.sneaking()) {
      (Click::Block(pos), true) => self.select_biome(world, player, &wand, pos),
      (Click::Block(pos), false) => self.change_biome(world, player, hand, &wand, pos),
      (Click::Air, true) => self.change_size(player, &wand),
      (Click::Air, false) => return EventFlow::Continue,
    }
    EventFlow::Handled
  }

  fn select_biome(
    &self,
    world: &mut dyn BiomeWorld,
    player: &dyn Player,
    wand: &BiomeWand,
    pos: Pos,
  ) {
    let biome = world.biome_at(pos);
    match wand.select_biome(biome) {
      Ok(()) => player.send_hotbar(Chat::colored(
        format!("Selected {}", self.biomes().name_of(biome)),
        Color::BrightGreen,
      )),
      Err(e) => player.send_hotbar(Chat::colored(e.to_string(), Color::Red)),
    }
  }

  fn change_biome(
    &self,
    world: &mut dyn BiomeWorld,
    player: &mut dyn Player,
    hand: Hand,
    wand: &BiomeWand,
    pos: Pos,
  ) {
    let result = wand.apply_at(world, pos, || player.set_hand_item(hand, Stack::empty()));
    match result {
      Ok(columns) => {
        for column in columns {
          world.spawn_particle(Particle::Flame, column.center() + FPos::new(0.0, 1.5, 0.0));
        }
      }
      Err(e) => player.send_hotbar(Chat::colored(e.to_string(), Color::Red)),
    }
  }

  fn change_size(&self, player: &dyn Player, wand: &BiomeWand) {
    match wand.cycle_size() {
      Ok(size) => player.send_hotbar(Chat::new(format!("Changed size to {size}"))),
      Err(e) => player.send_hotbar(Chat::colored(e.to_string(), Color::Red)),
    }
  }
}
