//! Typed accessors over an item's attached data.
//!
//! A [`Property`] is one key of an item's data, read and written through a
//! [`MetaCodec`]. It doesn't know anything about tools or biomes; it only
//! moves one typed value in and out of storage, and tells whoever registered
//! a callback that the value changed. Writes happen inside a single edit
//! scope on the item, so no reader ever sees half an update.

use crate::item::ItemRef;
use bc_common::nbt::Tag;
use std::marker::PhantomData;
use thiserror::Error;

/// A stored value that can't be turned back into its domain type. The usual
/// causes are a renamed variant or a registry entry that no longer exists.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// An error while reading a property the item schema requires.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropError {
  #[error("missing required property `{0}`")]
  Missing(&'static str),
  #[error(transparent)]
  Decode(#[from] DecodeError),
}

/// A bidirectional mapping between a domain value and its stored form.
pub trait MetaCodec {
  type Value;

  fn encode(&self, value: &Self::Value) -> Tag;
  fn decode(&self, tag: &Tag) -> Result<Self::Value, DecodeError>;
}

/// Stores a byte. Used for flags.
pub struct ByteCodec;

impl MetaCodec for ByteCodec {
  type Value = i8;

  fn encode(&self, value: &i8) -> Tag { Tag::Byte(*value) }
  fn decode(&self, tag: &Tag) -> Result<i8, DecodeError> {
    tag.as_byte().ok_or_else(|| DecodeError(format!("expected a byte, got {tag:?}")))
  }
}

/// Stores a 32 bit integer.
pub struct IntCodec;

impl MetaCodec for IntCodec {
  type Value = i32;

  fn encode(&self, value: &i32) -> Tag { Tag::Int(*value) }
  fn decode(&self, tag: &Tag) -> Result<i32, DecodeError> {
    tag.as_int().ok_or_else(|| DecodeError(format!("expected an int, got {tag:?}")))
  }
}

/// An enum where every variant has a stable name. The names are part of the
/// stored schema: renaming one breaks items in the wild.
pub trait StableName: Sized {
  fn name(&self) -> &'static str;
  fn from_name(name: &str) -> Option<Self>;
}

/// Stores an enum as its variant's stable name. Decoding is an exact-match
/// lookup; anything else is a [`DecodeError`].
pub struct NameCodec<T>(PhantomData<T>);

impl<T> NameCodec<T> {
  pub fn new() -> Self { NameCodec(PhantomData) }
}

impl<T> Default for NameCodec<T> {
  fn default() -> Self { NameCodec::new() }
}

impl<T: StableName> MetaCodec for NameCodec<T> {
  type Value = T;

  fn encode(&self, value: &T) -> Tag { Tag::String(value.name().into()) }
  fn decode(&self, tag: &Tag) -> Result<T, DecodeError> {
    let name = tag.as_str().ok_or_else(|| DecodeError(format!("expected a string, got {tag:?}")))?;
    T::from_name(name).ok_or_else(|| DecodeError(format!("unknown name `{name}`")))
  }
}

type Callback<V> = Box<dyn Fn(Option<&V>, Option<&V>)>;

/// A typed accessor for one key of an item's attached data.
///
/// Reads decode the stored tag on every call; the item is the single source
/// of truth, and a `Property` holds no cached value. Writes run inside one
/// edit scope, then fire the change callback with the old and new values.
pub struct Property<C: MetaCodec> {
  key:       &'static str,
  codec:     C,
  item:      ItemRef,
  on_change: Option<Callback<C::Value>>,
}

impl<C: MetaCodec> Property<C> {
  pub fn new(key: &'static str, codec: C, item: ItemRef) -> Self {
    Property { key, codec, item, on_change: None }
  }

  /// Sets the change callback, and returns the modified self. The callback
  /// runs synchronously after every successful write, with the decoded old
  /// value and the new one. `None` means absent on either side.
  pub fn with_on_change(
    mut self,
    f: impl Fn(Option<&C::Value>, Option<&C::Value>) + 'static,
  ) -> Self {
    self.on_change = Some(Box::new(f));
    self
  }

  /// Reads the stored value. `None` if nothing is stored under the key.
  pub fn get(&self) -> Result<Option<C::Value>, DecodeError> {
    let stack = self.item.lock();
    stack.tag(self.key).map(|tag| self.codec.decode(tag)).transpose()
  }

  /// Reads the stored value, failing if it is absent. Use this where the
  /// schema guarantees the key is present after construction.
  pub fn require(&self) -> Result<C::Value, PropError> {
    self.get()?.ok_or(PropError::Missing(self.key))
  }

  /// Encodes and stores the value, then fires the change callback. An old
  /// value that no longer decodes is reported to the callback as absent.
  pub fn set(&self, value: C::Value) {
    let old = self.item.edit(|stack| {
      let old = stack.tag(self.key).and_then(|tag| self.codec.decode(tag).ok());
      stack.set_tag(self.key, self.codec.encode(&value));
      old
    });
    self.notify(old.as_ref(), Some(&value));
  }

  /// Clears the entry, then fires the change callback with a `None` new
  /// value.
  pub fn remove(&self) {
    let old = self.item.edit(|stack| {
      let old = stack.tag(self.key).and_then(|tag| self.codec.decode(tag).ok());
      stack.remove_tag(self.key);
      old
    });
    self.notify(old.as_ref(), None);
  }

  fn notify(&self, old: Option<&C::Value>, new: Option<&C::Value>) {
    if let Some(cb) = &self.on_change {
      cb(old, new);
    }
  }
}
