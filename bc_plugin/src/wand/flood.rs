//! The column flood. Given a clicked block and a radius, this decides which
//! blocks change: per column of the square footprint, the vertically
//! contiguous run of blocks sharing the clicked height's biome.

use crate::{biome::Biome, world::BiomeWorld};
use bc_common::math::Pos;

/// Returns the center of every column in the square footprint around
/// `center`: all `(x, z)` within `radius` of it on both axes, inclusive,
/// rows along X. The clicked height is carried through unchanged.
pub fn columns(center: Pos, radius: i32) -> Vec<Pos> {
  let side = (2 * radius + 1).max(0) as usize;
  let mut out = Vec::with_capacity(side * side);
  for x in (center.x - radius)..=(center.x + radius) {
    for z in (center.z - radius)..=(center.z + radius) {
      out.push(Pos::new(x, center.y, z));
    }
  }
  out
}

/// Repaints one column. The biome at `at` is captured before any write;
/// then two walks run from the clicked height, one up to the top of the
/// world and one down to the bottom, each repainting blocks until the first
/// block whose biome differs from the captured one. The walks are
/// independent: a boundary above doesn't stop the walk below.
pub fn fill_column(world: &mut dyn BiomeWorld, at: Pos, target: Biome) {
  let source = world.biome_at(at);
  for y in at.y..world.max_y() {
    let pos = at.with_y(y);
    if world.biome_at(pos) != source {
      break;
    }
    world.set_biome_at(pos, target);
  }
  // The upward walk already covered the clicked block, so this starts one
  // below it.
  for y in (world.min_y()..at.y).rev() {
    let pos = at.with_y(y);
    if world.biome_at(pos) != source {
      break;
    }
    world.set_biome_at(pos, target);
  }
}
