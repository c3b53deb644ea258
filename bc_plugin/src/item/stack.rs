use super::Type;
use bc_common::{
  nbt::{Tag, NBT},
  util::Chat,
};
use std::num::NonZeroU8;

/// An item stack: a kind, an amount, and any attached data. The attached
/// data is where plugins keep their per-item state.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
  item:   Type,
  amount: NonZeroU8,
  data:   ItemData,
}

// This is required for `Stack::empty` to be `const`.
//
// SAFETY: The value must not be zero, so using `1` is safe.
const ONE: NonZeroU8 = unsafe { NonZeroU8::new_unchecked(1) };

impl Stack {
  /// The empty stack. Useful for array initializers. This is the same as
  /// [`Stack::empty`].
  pub const EMPTY: Stack = Stack::empty();
  /// Creates an empty item stack. This has the type set to air, and the
  /// count set to 0.
  pub const fn empty() -> Self { Stack { item: Type::Air, amount: ONE, data: ItemData::new() } }
  /// Creates an item stack containing a single item with the given type.
  pub fn new(item: Type) -> Self { Stack { item, amount: ONE, data: ItemData::new() } }

  /// Sets the amount in self, and returns the modified self. If the stack is
  /// air, this will do nothing.
  pub fn with_amount(mut self, amount: u8) -> Self {
    self.set_amount(amount);
    self
  }
  /// Sets the amount in the item stack. If the stack is air, this will do
  /// nothing.
  pub fn set_amount(&mut self, amount: u8) {
    if amount == 0 {
      self.item = Type::Air;
      self.amount = ONE;
      // Keep amount at 1 if we are air.
    } else if self.item != Type::Air {
      self.amount = NonZeroU8::new(amount).unwrap();
    }
  }

  /// Returns the number of items in this item stack.
  pub fn amount(&self) -> u8 {
    if self.item == Type::Air {
      0
    } else {
      self.amount.get()
    }
  }
  /// Returns the item that is in this item stack.
  pub fn item(&self) -> Type { self.item }
  /// Returns true if this item stack is considered "empty". This is true
  /// whenever the type is Air, or the count is zero.
  pub fn is_empty(&self) -> bool { self.item == Type::Air }

  pub fn data(&self) -> &ItemData { &self.data }
  pub fn data_mut(&mut self) -> &mut ItemData { &mut self.data }

  /// Returns the custom display name, if one is set.
  pub fn display_name(&self) -> Option<&Chat> { self.data.display.name.as_ref() }
  pub fn set_display_name(&mut self, name: Chat) { self.data.display.name = Some(name); }

  /// Returns the item's label lines.
  pub fn lore(&self) -> &[Chat] { &self.data.display.lore }
  pub fn set_lore(&mut self, lore: Vec<Chat>) { self.data.display.lore = lore; }

  /// Looks up a plugin-attached entry.
  pub fn tag(&self, key: &str) -> Option<&Tag> { self.data.tags().and_then(|tags| tags.get(key)) }
  /// Returns true if a plugin-attached entry exists under `key`.
  pub fn has_tag(&self, key: &str) -> bool { self.tag(key).is_some() }
  /// Stores a plugin-attached entry.
  pub fn set_tag(&mut self, key: &str, tag: Tag) { self.data.tags_mut().set(key, tag); }
  /// Removes and returns a plugin-attached entry.
  pub fn remove_tag(&mut self, key: &str) -> Option<Tag> {
    self.data.tags.as_mut().and_then(|tags| tags.remove(key))
  }
}

/// The version-agnostic attached data of an item: how it displays, plus any
/// plugin-stored entries.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ItemData {
  pub display: ItemDisplay,
  /// Plugin-stored entries. `None` until something writes one, so that
  /// plain items stay cheap.
  tags:        Option<NBT>,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct ItemDisplay {
  /// If `None`, the item will have its original name. If `Some`, the item
  /// will have the given custom name.
  pub name: Option<Chat>,
  pub lore: Vec<Chat>,
}

impl ItemData {
  pub const fn new() -> Self { ItemData { display: ItemDisplay::new(), tags: None } }

  pub fn tags(&self) -> Option<&NBT> { self.tags.as_ref() }
  pub fn tags_mut(&mut self) -> &mut NBT { self.tags.get_or_insert_with(|| NBT::empty("tag")) }
}

impl ItemDisplay {
  pub const fn new() -> Self { ItemDisplay { name: None, lore: Vec::new() } }
}
