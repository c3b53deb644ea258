use std::fmt;

/// An item kind. Only the kinds the plugin creates are named here; the
/// host's full item table is its own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
  Air,
  BlazeRod,
  NetherStar,
  NetheriteBlock,
}

impl Type {
  /// Returns the name of this item. This is something like
  /// `minecraft:blaze_rod`.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Air => "minecraft:air",
      Self::BlazeRod => "minecraft:blaze_rod",
      Self::NetherStar => "minecraft:nether_star",
      Self::NetheriteBlock => "minecraft:netherite_block",
    }
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}
