use super::Pos;
use std::{
  fmt,
  ops::{Add, AddAssign},
};

/// A position in the world, with full precision. Used for things that don't
/// sit on the block grid, like particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FPos {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl fmt::Display for FPos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "FPos({} {} {})", self.x, self.y, self.z)
  }
}

impl Default for FPos {
  fn default() -> FPos { FPos::new(0.0, 0.0, 0.0) }
}

impl From<Pos> for FPos {
  fn from(p: Pos) -> FPos { FPos { x: p.x.into(), y: p.y.into(), z: p.z.into() } }
}

impl FPos {
  /// Creates a new position.
  #[inline(always)]
  pub fn new(x: f64, y: f64, z: f64) -> Self { FPos { x, y, z } }
  /// Returns the X value of the position.
  #[inline(always)]
  pub fn x(&self) -> f64 { self.x }
  /// Returns the Y value of the position.
  #[inline(always)]
  pub fn y(&self) -> f64 { self.y }
  /// Returns the Z value of the position.
  #[inline(always)]
  pub fn z(&self) -> f64 { self.z }
}

impl Add for FPos {
  type Output = FPos;
  fn add(self, other: FPos) -> FPos {
    FPos { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
  }
}

impl AddAssign for FPos {
  fn add_assign(&mut self, other: FPos) {
    self.x += other.x;
    self.y += other.y;
    self.z += other.z;
  }
}
