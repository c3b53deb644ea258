//! A small NBT implementation. This only covers the tags the plugin actually
//! stores on items; the host is responsible for the full format.

mod serialize;

use std::collections::HashMap;

/// A named tag. The name is empty for most root tags. This is what gets
/// embedded into an item's serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct NBT {
  name: String,
  tag:  Tag,
}

/// A single NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
  End,
  Byte(i8),
  Short(i16),
  Int(i32),
  Long(i64),
  Float(f32),
  Double(f64),
  String(String),
  List(Vec<Tag>),
  Compound(HashMap<String, Tag>),
}

impl NBT {
  /// Creates a named tag with the given value.
  pub fn new(name: &str, tag: Tag) -> Self { NBT { name: name.into(), tag } }
  /// Creates a named tag with an empty compound as its value.
  pub fn empty(name: &str) -> Self { NBT::new(name, Tag::Compound(HashMap::new())) }

  pub fn name(&self) -> &str { &self.name }
  pub fn tag(&self) -> &Tag { &self.tag }

  /// Looks up an entry of this compound. Returns `None` for non-compound
  /// tags as well; only compounds have entries.
  pub fn get(&self, key: &str) -> Option<&Tag> {
    match &self.tag {
      Tag::Compound(entries) => entries.get(key),
      _ => None,
    }
  }
  /// Returns true if this compound has an entry under `key`.
  pub fn has(&self, key: &str) -> bool { self.get(key).is_some() }
  /// Inserts an entry into this compound. Does nothing if this tag is not a
  /// compound.
  pub fn set(&mut self, key: &str, tag: Tag) {
    if let Tag::Compound(entries) = &mut self.tag {
      entries.insert(key.into(), tag);
    }
  }
  /// Removes and returns the entry under `key`.
  pub fn remove(&mut self, key: &str) -> Option<Tag> {
    match &mut self.tag {
      Tag::Compound(entries) => entries.remove(key),
      _ => None,
    }
  }
  /// Returns true if this is a compound with no entries.
  pub fn is_empty(&self) -> bool {
    match &self.tag {
      Tag::Compound(entries) => entries.is_empty(),
      _ => false,
    }
  }
}

impl Tag {
  /// Builds a compound from a list of named tags. Handy in tests and
  /// constants, where typing out a `HashMap` is a pain.
  pub fn compound(value: &[(&str, Tag)]) -> Tag {
    Tag::Compound(value.iter().map(|(name, tag)| ((*name).into(), tag.clone())).collect())
  }

  /// If this is a byte, returns it.
  pub fn as_byte(&self) -> Option<i8> {
    match self {
      Tag::Byte(v) => Some(*v),
      _ => None,
    }
  }
  /// If this is an int, returns it.
  pub fn as_int(&self) -> Option<i32> {
    match self {
      Tag::Int(v) => Some(*v),
      _ => None,
    }
  }
  /// If this is a string, returns it.
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Tag::String(v) => Some(v),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_compound_entries() {
    let mut nbt = NBT::empty("tag");
    assert!(nbt.is_empty());
    nbt.set("uses", Tag::Int(2500));
    nbt.set("marker", Tag::Byte(1));
    assert!(nbt.has("uses"));
    assert_eq!(nbt.get("uses"), Some(&Tag::Int(2500)));
    assert_eq!(nbt.get("uses").and_then(Tag::as_int), Some(2500));
    assert_eq!(nbt.get("marker").and_then(Tag::as_byte), Some(1));
    assert_eq!(nbt.get("marker").and_then(Tag::as_int), None);
    assert_eq!(nbt.remove("uses"), Some(Tag::Int(2500)));
    assert!(!nbt.has("uses"));
  }

  #[test]
  fn test_non_compound() {
    let mut nbt = NBT::new("age", Tag::Int(3));
    assert_eq!(nbt.get("anything"), None);
    nbt.set("anything", Tag::Byte(1));
    assert_eq!(nbt.tag(), &Tag::Int(3));
  }
}
