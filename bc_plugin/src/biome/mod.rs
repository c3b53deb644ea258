//! Biomes. The host owns the real biome table; the plugin sees it as a
//! [`Registry`] of stable string keys, and passes [`Biome`] handles around.

use crate::props::{DecodeError, MetaCodec};
use bc_common::nbt::Tag;
use std::{collections::HashMap, sync::Arc};

/// A biome. This is a handle into a [`Registry`]; two biomes are equal
/// exactly when they came from the same registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Biome {
  id: u32,
}

impl Biome {
  pub fn id(&self) -> u32 { self.id }
}

/// Any data specific to a biome.
#[derive(Debug)]
pub struct Data {
  key:  String,
  name: String,
}

impl Data {
  /// Returns the biome's key. This is something like `minecraft:plains`.
  pub fn key(&self) -> &str { &self.key }
  /// Returns the display name of this biome. This is something like
  /// `Plains`.
  pub fn name(&self) -> &str { &self.name }
}

/// All the biomes the host knows about, keyed by their stable string key.
#[derive(Debug, Default)]
pub struct Registry {
  entries: Vec<Data>,
  index:   HashMap<String, Biome>,
}

impl Registry {
  pub fn new() -> Registry { Registry::default() }

  /// Registers a biome under the given key, and returns its handle. Keys
  /// are namespaced, like `minecraft:plains`. Registering a key twice
  /// returns the existing handle.
  pub fn add(&mut self, key: &str) -> Biome {
    if let Some(biome) = self.index.get(key) {
      return *biome;
    }
    let biome = Biome { id: self.entries.len() as u32 };
    self.entries.push(Data { key: key.into(), name: display_name(key) });
    self.index.insert(key.into(), biome);
    biome
  }

  /// Looks up a biome by its key.
  pub fn get(&self, key: &str) -> Option<Biome> { self.index.get(key).copied() }
  /// Returns the key of the given biome.
  pub fn key_of(&self, biome: Biome) -> &str { self.entries[biome.id as usize].key() }
  /// Returns the display name of the given biome.
  pub fn name_of(&self, biome: Biome) -> &str { self.entries[biome.id as usize].name() }

  pub fn len(&self) -> usize { self.entries.len() }
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// The standard biome set. A host would build its registry from its own
  /// data; this is the vanilla table, and what the tests run against.
  pub fn vanilla() -> Registry {
    let mut registry = Registry::new();
    for key in VANILLA {
      registry.add(key);
    }
    registry
  }
}

/// `minecraft:dark_forest` -> `Dark Forest`.
fn display_name(key: &str) -> String {
  let path = key.rsplit(':').next().unwrap_or(key);
  let mut out = String::new();
  for (i, word) in path.split('_').enumerate() {
    if i != 0 {
      out.push(' ');
    }
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
      out.extend(first.to_uppercase());
      out.push_str(chars.as_str());
    }
  }
  out
}

const VANILLA: &[&str] = &[
  "minecraft:plains",
  "minecraft:sunflower_plains",
  "minecraft:desert",
  "minecraft:forest",
  "minecraft:dark_forest",
  "minecraft:birch_forest",
  "minecraft:taiga",
  "minecraft:snowy_taiga",
  "minecraft:savanna",
  "minecraft:jungle",
  "minecraft:swamp",
  "minecraft:mangrove_swamp",
  "minecraft:ocean",
  "minecraft:deep_ocean",
  "minecraft:warm_ocean",
  "minecraft:river",
  "minecraft:frozen_river",
  "minecraft:beach",
  "minecraft:badlands",
  "minecraft:cherry_grove",
  "minecraft:meadow",
  "minecraft:grove",
  "minecraft:stony_peaks",
  "minecraft:mushroom_fields",
  "minecraft:dripstone_caves",
  "minecraft:lush_caves",
  "minecraft:deep_dark",
  "minecraft:nether_wastes",
  "minecraft:basalt_deltas",
  "minecraft:crimson_forest",
  "minecraft:warped_forest",
  "minecraft:soul_sand_valley",
  "minecraft:the_void",
  "minecraft:the_end",
  "minecraft:small_end_islands",
  "minecraft:end_barrens",
  "minecraft:end_midlands",
  "minecraft:end_highlands",
];

/// Stores a biome as its registry key.
pub struct BiomeCodec {
  biomes: Arc<Registry>,
}

impl BiomeCodec {
  pub fn new(biomes: Arc<Registry>) -> Self { BiomeCodec { biomes } }
}

impl MetaCodec for BiomeCodec {
  type Value = Biome;

  fn encode(&self, value: &Biome) -> Tag { Tag::String(self.biomes.key_of(*value).into()) }
  fn decode(&self, tag: &Tag) -> Result<Biome, DecodeError> {
    let key = tag.as_str().ok_or_else(|| DecodeError(format!("expected a string, got {tag:?}")))?;
    if !key.contains(':') {
      return Err(DecodeError(format!("malformed biome key `{key}`")));
    }
    self.biomes.get(key).ok_or_else(|| DecodeError(format!("no biome with key `{key}`")))
  }
}
