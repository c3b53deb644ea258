//! The biome changer tool. A tool is an ordinary item carrying a marker
//! entry plus its state (selected biome, remaining uses, size) in its
//! attached data. Everything here reads and writes that data through
//! [`Property`] accessors, so the item is always the single source of truth
//! and the item's label stays in sync with every change.

mod flood;
#[cfg(test)]
mod tests;

pub use flood::{columns, fill_column};

use crate::{
  biome::{Biome, BiomeCodec, Registry},
  item::{ItemRef, Stack, Type},
  props::{ByteCodec, IntCodec, NameCodec, PropError, Property, StableName},
  world::{BiomeWorld, Environment},
};
use bc_common::{
  math::Pos,
  nbt::Tag,
  util::{chat::Color, Chat},
};
use std::{fmt, sync::Arc};
use thiserror::Error;

const MARKER_KEY: &str = "biome_changer:tool";
const SELECTED_BIOME_KEY: &str = "biome_changer:selected_biome";
const USES_KEY: &str = "biome_changer:uses_remaining";
const SIZE_KEY: &str = "biome_changer:size";

/// How many uses a fresh tool starts with.
pub const DEFAULT_USES: i32 = 2500;

const BROKEN_LABEL: &str = "BROKEN BIOME CHANGER";

/// Biomes the tool refuses to select: the nether set, the end set, the
/// void, and the deep dark.
const ILLEGAL_BIOMES: &[&str] = &[
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
  "minecraft:deep_dark",
];

/// The affected-area size of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
  // ~5x5
  Small,
  // ~11x11
  Large,
}

impl Size {
  /// Returns the footprint radius. The footprint is the square of columns
  /// within this many blocks of the clicked one, on both horizontal axes.
  pub fn radius(&self) -> i32 {
    match self {
      Self::Small => 2,
      Self::Large => 5,
    }
  }
  /// Returns how many uses one application costs.
  pub fn cost(&self) -> i32 {
    match self {
      Self::Small => 1,
      Self::Large => 3,
    }
  }
  /// Returns the next size. Wraps around.
  pub fn cycle(&self) -> Size {
    match self {
      Self::Small => Size::Large,
      Self::Large => Size::Small,
    }
  }
}

impl StableName for Size {
  fn name(&self) -> &'static str {
    match self {
      Self::Small => "SMALL",
      Self::Large => "LARGE",
    }
  }
  fn from_name(name: &str) -> Option<Self> {
    match name {
      "SMALL" => Some(Self::Small),
      "LARGE" => Some(Self::Large),
      _ => None,
    }
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Small => write!(f, "small"),
      Self::Large => write!(f, "large"),
    }
  }
}

/// Why an operation on the tool didn't happen. These are shown to the
/// player as-is, so the messages are written for them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UseError {
  #[error("You have to select a biome first")]
  NoBiomeSelected,
  #[error("This biome can't be selected")]
  IllegalBiome,
  #[error("You don't have enough uses left")]
  InsufficientUses,
  #[error("You can only change the biome in the overworld")]
  WrongWorld,
  /// The item's stored data went bad under us. Construction validates the
  /// schema, so hitting this means the item changed since.
  #[error("This biome changer is broken")]
  Broken(#[from] PropError),
}

/// A biome changer tool, backed by an item.
pub struct BiomeWand {
  item:     ItemRef,
  biomes:   Arc<Registry>,
  selected: Property<BiomeCodec>,
  uses:     Property<IntCodec>,
  size:     Property<NameCodec<Size>>,
}

impl BiomeWand {
  /// Reads a tool out of the given item. Returns `None` if the item isn't a
  /// biome changer at all. An item that carries the marker but is missing
  /// part of its schema gets marked broken, logged, and also yields `None`,
  /// so one bad item can't take the interaction handler down.
  pub fn from_item(item: &ItemRef, biomes: &Arc<Registry>) -> Option<BiomeWand> {
    let marker = Property::new(MARKER_KEY, ByteCodec, item.clone());
    if marker.get().ok().flatten().unwrap_or(0) <= 0 {
      return None;
    }
    match BiomeWand::reconstruct(item, biomes) {
      Ok(wand) => Some(wand),
      Err(e) => {
        warn!("found a broken biome changer: {e}");
        mark_broken(item, &e);
        None
      }
    }
  }

  fn reconstruct(item: &ItemRef, biomes: &Arc<Registry>) -> Result<BiomeWand, PropError> {
    let selected = Property::new(SELECTED_BIOME_KEY, BiomeCodec::new(biomes.clone()), item.clone())
      .with_on_change({
        let item = item.clone();
        let biomes = biomes.clone();
        move |_, new| {
          let lore = lore_for(&biomes, new.copied(), read_uses(&item), read_size(&item));
          item.edit(|stack| stack.set_lore(lore));
        }
      });
    let uses = Property::new(USES_KEY, IntCodec, item.clone()).with_on_change({
      let item = item.clone();
      let biomes = biomes.clone();
      move |_, new| {
        let selected = read_selected(&item, &biomes);
        let lore = lore_for(&biomes, selected, new.copied().unwrap_or(0), read_size(&item));
        item.edit(|stack| stack.set_lore(lore));
      }
    });
    let size = Property::new(SIZE_KEY, NameCodec::new(), item.clone()).with_on_change({
      let item = item.clone();
      let biomes = biomes.clone();
      move |_, new| {
        let selected = read_selected(&item, &biomes);
        let size = new.copied().unwrap_or(Size::Small);
        let lore = lore_for(&biomes, selected, read_uses(&item), size);
        item.edit(|stack| stack.set_lore(lore));
      }
    });

    // A tool must have its counters; a missing selection just means none
    // has been made yet. Entries that no longer decode fail here too.
    uses.require()?;
    size.require()?;
    let _ = selected.get()?;

    Ok(BiomeWand {
      item: item.clone(),
      biomes: biomes.clone(),
      selected,
      uses,
      size,
    })
  }

  /// Builds a fresh biome changer item: full uses, small size, no biome
  /// selected yet.
  pub fn new_item(biomes: &Registry) -> Stack {
    let mut stack = Stack::new(Type::BlazeRod);
    stack.set_display_name(Chat::colored("Biome Changer", Color::Cyan));
    stack.set_tag(MARKER_KEY, Tag::Byte(1));
    stack.set_tag(USES_KEY, Tag::Int(DEFAULT_USES));
    stack.set_tag(SIZE_KEY, Tag::String(Size::Small.name().into()));
    stack.set_lore(lore_for(biomes, None, DEFAULT_USES, Size::Small));
    stack
  }

  /// The item this tool is backed by.
  pub fn item(&self) -> &ItemRef { &self.item }
  /// The currently selected biome, if any.
  pub fn selected_biome(&self) -> Result<Option<Biome>, PropError> { Ok(self.selected.get()?) }
  /// How many uses are left.
  pub fn uses_remaining(&self) -> Result<i32, PropError> { self.uses.require() }
  /// The current affected-area size.
  pub fn size(&self) -> Result<Size, PropError> { self.size.require() }

  /// Selects the biome the next application will paint. Some biomes are
  /// not selectable; those leave the tool unchanged.
  pub fn select_biome(&self, biome: Biome) -> Result<(), UseError> {
    if ILLEGAL_BIOMES.contains(&self.biomes.key_of(biome)) {
      return Err(UseError::IllegalBiome);
    }
    self.selected.set(biome);
    Ok(())
  }

  /// Switches to the next size, and returns it.
  pub fn cycle_size(&self) -> Result<Size, UseError> {
    let next = self.size.require()?.cycle();
    self.size.set(next);
    Ok(next)
  }

  /// Applies the selected biome around `pos`: every column of the footprint
  /// gets its contiguous same-biome run around the clicked height repainted
  /// (see [`fill_column`]), and the tool pays the size's cost in uses.
  ///
  /// On success, returns the center of every column of the footprint, for
  /// the caller to render feedback at. `consume` is called if this
  /// application used the tool up; it should clear the slot the tool came
  /// from. Failures leave the world and the tool untouched.
  pub fn apply_at(
    &self,
    world: &mut dyn BiomeWorld,
    pos: Pos,
    consume: impl FnOnce(),
  ) -> Result<Vec<Pos>, UseError> {
    let biome = match self.selected.get().map_err(PropError::from)? {
      Some(biome) => biome,
      None => return Err(UseError::NoBiomeSelected),
    };
    let size = self.size.require()?;
    let uses = self.uses.require()?;
    if uses < size.cost() {
      return Err(UseError::InsufficientUses);
    }
    if world.environment() != Environment::Normal {
      return Err(UseError::WrongWorld);
    }

    let columns = columns(pos, size.radius());
    for column in &columns {
      fill_column(world, *column, biome);
    }

    let remaining = uses - size.cost();
    self.uses.set(remaining);
    if remaining <= 0 {
      info!("a biome changer ran out of uses");
      consume();
    }
    Ok(columns)
  }
}

/// Appends the broken marker to the item's label. Guarded, so an item that
/// keeps getting clicked only gets annotated once.
fn mark_broken(item: &ItemRef, err: &PropError) {
  item.edit(|stack| {
    if stack.lore().iter().any(|line| line.to_plain() == BROKEN_LABEL) {
      return;
    }
    let mut lore = stack.lore().to_vec();
    lore.push(Chat::colored(BROKEN_LABEL, Color::rgb(255, 0, 0)));
    lore.push(Chat::new(err.to_string()));
    stack.set_lore(lore);
  });
}

/// The three-line label shown on the item. Derived from the current state
/// on every property change, and never read back.
fn lore_for(biomes: &Registry, selected: Option<Biome>, uses: i32, size: Size) -> Vec<Chat> {
  let name = selected.map(|biome| biomes.name_of(biome)).unwrap_or("none");
  let mut biome_line = Chat::colored("Biome: ", Color::Gray);
  biome_line.add(name).color(Color::Gold);
  let mut uses_line = Chat::colored("Uses: ", Color::Gray);
  uses_line.add(uses.to_string()).color(Color::Gold);
  let mut size_line = Chat::colored("Size: ", Color::Gray);
  size_line.add(size.to_string()).color(Color::Gold);
  vec![biome_line, uses_line, size_line]
}

fn read_uses(item: &ItemRef) -> i32 {
  Property::new(USES_KEY, IntCodec, item.clone()).get().ok().flatten().unwrap_or(0)
}
fn read_size(item: &ItemRef) -> Size {
  Property::new(SIZE_KEY, NameCodec::new(), item.clone()).get().ok().flatten().unwrap_or(Size::Small)
}
fn read_selected(item: &ItemRef, biomes: &Arc<Registry>) -> Option<Biome> {
  Property::new(SELECTED_BIOME_KEY, BiomeCodec::new(biomes.clone()), item.clone())
    .get()
    .ok()
    .flatten()
}
