//! In-memory stand-ins for the host interfaces. Only compiled into tests.

use crate::{
  biome::Biome,
  item::{ItemRef, Stack},
  particle::Particle,
  player::{Hand, Player},
  world::{BiomeWorld, Environment},
};
use bc_common::{
  math::{FPos, Pos},
  util::Chat,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// A world that stores biomes in a map. Unset blocks report the fallback
/// biome, so a "flat" world is just a fallback and nothing else.
pub struct TestWorld {
  pub env:       Environment,
  pub min_y:     i32,
  pub max_y:     i32,
  pub fallback:  Biome,
  pub blocks:    HashMap<Pos, Biome>,
  pub particles: Vec<(Particle, FPos)>,
}

impl TestWorld {
  pub fn new(env: Environment, min_y: i32, max_y: i32, fallback: Biome) -> Self {
    TestWorld { env, min_y, max_y, fallback, blocks: HashMap::new(), particles: vec![] }
  }

  /// Writes a run of biomes into one column, bottom-up starting at `bottom`.
  pub fn set_column(&mut self, x: i32, z: i32, bottom: i32, biomes: &[Biome]) {
    for (i, biome) in biomes.iter().enumerate() {
      self.blocks.insert(Pos::new(x, bottom + i as i32, z), *biome);
    }
  }

  /// Reads a whole column back, bottom to top.
  pub fn column(&self, x: i32, z: i32) -> Vec<Biome> {
    (self.min_y..self.max_y).map(|y| self.biome_at(Pos::new(x, y, z))).collect()
  }
}

impl BiomeWorld for TestWorld {
  fn environment(&self) -> Environment { self.env }
  fn min_y(&self) -> i32 { self.min_y }
  fn max_y(&self) -> i32 { self.max_y }
  fn biome_at(&self, pos: Pos) -> Biome { self.blocks.get(&pos).copied().unwrap_or(self.fallback) }
  fn set_biome_at(&mut self, pos: Pos, biome: Biome) {
    self.blocks.insert(pos, biome);
  }
  fn spawn_particle(&mut self, particle: Particle, pos: FPos) {
    self.particles.push((particle, pos));
  }
}

/// A player with two hands and a message log.
#[derive(Default)]
pub struct TestPlayer {
  pub name:     String,
  pub op:       bool,
  pub sneaking: bool,
  pub main:     Option<ItemRef>,
  pub off:      Option<ItemRef>,
  pub given:    Vec<Stack>,
  pub messages: Mutex<Vec<Chat>>,
}

impl TestPlayer {
  pub fn new() -> Self { TestPlayer { name: "steve".into(), ..TestPlayer::default() } }

  pub fn holding(stack: Stack) -> Self {
    TestPlayer { main: Some(ItemRef::new(stack)), ..TestPlayer::new() }
  }

  pub fn last_message(&self) -> Option<String> {
    self.messages.lock().last().map(|msg| msg.to_plain())
  }
}

impl Player for TestPlayer {
  fn username(&self) -> &str { &self.name }
  fn is_op(&self) -> bool { self.op }
  fn sneaking(&self) -> bool { self.sneaking }
  fn hand_item(&self, hand: Hand) -> Option<ItemRef> {
    match hand {
      Hand::Main => self.main.clone(),
      Hand::Off => self.off.clone(),
    }
  }
  fn set_hand_item(&mut self, hand: Hand, stack: Stack) {
    let slot = if stack.is_empty() { None } else { Some(ItemRef::new(stack)) };
    match hand {
      Hand::Main => self.main = slot,
      Hand::Off => self.off = slot,
    }
  }
  fn give_item(&mut self, stack: Stack) {
    self.given.push(stack);
  }
  fn send_hotbar(&self, msg: Chat) {
    self.messages.lock().push(msg);
  }
}
