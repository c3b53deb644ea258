use super::FPos;
use std::{
  fmt,
  ops::{Add, AddAssign, Sub, SubAssign},
};

/// A block position. The Y axis is up, and the world spans a fixed range of
/// it; X and Z are the horizontal axes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl Default for Pos {
  fn default() -> Self { Pos::new(0, 0, 0) }
}

impl fmt::Display for Pos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Pos({} {} {})", self.x, self.y, self.z)
  }
}

impl Pos {
  /// Creates a new block position.
  pub const fn new(x: i32, y: i32, z: i32) -> Self { Pos { x, y, z } }
  /// Returns the X value of the position.
  pub const fn x(&self) -> i32 { self.x }
  /// Returns the Y value of the position.
  pub const fn y(&self) -> i32 { self.y }
  /// Returns the Z value of the position.
  pub const fn z(&self) -> i32 { self.z }
  /// Returns self, with the y set to the given value.
  pub const fn with_y(mut self, y: i32) -> Self {
    self.y = y;
    self
  }
  /// Returns the center of this block, as a float position. This is `self`
  /// offset by half a block on the horizontal axes.
  pub fn center(&self) -> FPos { FPos::new(self.x as f64 + 0.5, self.y as f64, self.z as f64 + 0.5) }
}

impl Add for Pos {
  type Output = Pos;
  fn add(self, other: Pos) -> Pos {
    Pos { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
  }
}

impl AddAssign for Pos {
  fn add_assign(&mut self, other: Pos) {
    self.x += other.x;
    self.y += other.y;
    self.z += other.z;
  }
}

impl Sub for Pos {
  type Output = Pos;
  fn sub(self, other: Pos) -> Pos {
    Pos { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
  }
}

impl SubAssign for Pos {
  fn sub_assign(&mut self, other: Pos) {
    self.x -= other.x;
    self.y -= other.y;
    self.z -= other.z;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ops() {
    assert_eq!(Pos::new(1, 2, 3) + Pos::new(10, 20, 30), Pos::new(11, 22, 33));
    assert_eq!(Pos::new(11, 22, 33) - Pos::new(10, 20, 30), Pos::new(1, 2, 3));
    assert_eq!(Pos::new(1, 2, 3).with_y(64), Pos::new(1, 64, 3));
  }

  #[test]
  fn test_center() {
    assert_eq!(Pos::new(0, 5, 0).center(), FPos::new(0.5, 5.0, 0.5));
    assert_eq!(Pos::new(-3, 0, 7).center(), FPos::new(-2.5, 0.0, 7.5));
  }
}
