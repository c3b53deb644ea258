//! The wandering trader offer. A rare, expensive way to get the tool
//! without being an operator. This never touches the tool model; it only
//! sells fresh items.

use crate::{
  item::{Stack, Type},
  wand::BiomeWand,
  BiomeChanger,
};
use rand::Rng;

/// A single merchant offer.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOffer {
  pub result:      Stack,
  pub ingredients: Vec<Stack>,
  /// How many times the offer can be taken before it locks.
  pub max_uses:    u32,
}

/// The slice of a wandering trader the plugin needs.
pub trait Trader {
  fn add_offer(&mut self, offer: TradeOffer);
}

impl BiomeChanger {
  /// Called by the host when a wandering trader spawns. With the configured
  /// odds, the trader gets a one-time offer selling the tool.
  pub fn on_trader_spawn(&self, trader: &mut dyn Trader, rng: &mut impl Rng) {
    let chance = self.settings().trade_chance;
    if chance == 0 {
      // Disabled in the config.
      return;
    }
    if !rng.gen_ratio(1, chance) {
      return;
    }
    trader.add_offer(TradeOffer {
      result:      BiomeWand::new_item(self.biomes()),
      ingredients: vec![Stack::new(Type::NetheriteBlock), Stack::new(Type::NetherStar)],
      max_uses:    1,
    });
  }
}
