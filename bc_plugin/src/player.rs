use crate::item::{ItemRef, Stack};
use bc_common::util::Chat;

/// The hand an item is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
  Main,
  Off,
}

/// The slice of a player the plugin needs: who they are, what they hold,
/// and a way to show them a short message.
pub trait Player {
  /// Returns the player's username.
  fn username(&self) -> &str;
  /// Returns true if this player is a server operator.
  fn is_op(&self) -> bool;
  /// Returns true if the player is currently sneaking.
  fn sneaking(&self) -> bool;
  /// Returns the item held in the given hand, if any.
  fn hand_item(&self, hand: Hand) -> Option<ItemRef>;
  /// Replaces the item held in the given hand. Pass [`Stack::empty`] to
  /// clear the slot.
  fn set_hand_item(&mut self, hand: Hand, stack: Stack);
  /// Adds an item to the player's inventory.
  fn give_item(&mut self, stack: Stack);
  /// Shows a short message above the player's hotbar.
  fn send_hotbar(&self, msg: Chat);
}
