use crate::{biome::Biome, particle::Particle};
use bc_common::math::{FPos, Pos};

/// The kind of a world. The biome changer only works in the overworld, so
/// this is the one world property the plugin cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
  /// The overworld.
  Normal,
  Nether,
  End,
}

/// The slice of the host world the plugin reads and writes. The host hands
/// an implementation of this to every event handler it calls.
pub trait BiomeWorld {
  /// Returns the kind of this world.
  fn environment(&self) -> Environment;
  /// Returns the lowest buildable height, inclusive.
  fn min_y(&self) -> i32;
  /// Returns the top of the world, exclusive.
  fn max_y(&self) -> i32;
  /// Returns the biome at the given block.
  fn biome_at(&self, pos: Pos) -> Biome;
  /// Sets the biome at the given block.
  fn set_biome_at(&mut self, pos: Pos, biome: Biome);
  /// Shows a single particle at the given position.
  fn spawn_particle(&mut self, particle: Particle, pos: FPos);
}
