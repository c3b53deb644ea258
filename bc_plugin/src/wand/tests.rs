use super::*;
use crate::testutil::TestWorld;
use pretty_assertions::assert_eq;
use std::cell::Cell;

fn registry() -> Arc<Registry> { Arc::new(Registry::vanilla()) }

fn fresh_item(biomes: &Arc<Registry>) -> ItemRef { ItemRef::new(BiomeWand::new_item(biomes)) }

fn wand(item: &ItemRef, biomes: &Arc<Registry>) -> BiomeWand {
  BiomeWand::from_item(item, biomes).expect("item should be a working biome changer")
}

fn overworld(biomes: &Registry) -> TestWorld {
  TestWorld::new(Environment::Normal, -64, 320, biomes.get("minecraft:plains").unwrap())
}

fn plain_lore(item: &ItemRef) -> Vec<String> {
  item.lock().lore().iter().map(|line| line.to_plain()).collect()
}

#[test]
fn test_factory_defaults() {
  let biomes = registry();
  let stack = BiomeWand::new_item(&biomes);

  assert_eq!(stack.item(), Type::BlazeRod);
  assert_eq!(stack.display_name().map(|name| name.to_plain()), Some("Biome Changer".into()));
  assert_eq!(stack.tag(MARKER_KEY), Some(&Tag::Byte(1)));
  assert_eq!(stack.tag(USES_KEY), Some(&Tag::Int(2500)));
  assert_eq!(stack.tag(SIZE_KEY), Some(&Tag::String("SMALL".into())));
  assert_eq!(stack.tag(SELECTED_BIOME_KEY), None);

  let item = ItemRef::new(stack);
  assert_eq!(plain_lore(&item), vec!["Biome: none", "Uses: 2500", "Size: small"]);
}

#[test]
fn test_not_a_tool() {
  let biomes = registry();
  assert!(BiomeWand::from_item(&ItemRef::new(Stack::new(Type::BlazeRod)), &biomes).is_none());

  let mut stack = Stack::new(Type::BlazeRod);
  stack.set_tag(MARKER_KEY, Tag::Byte(0));
  assert!(BiomeWand::from_item(&ItemRef::new(stack), &biomes).is_none());
}

#[test]
fn test_broken_tool_is_annotated_once() {
  let biomes = registry();
  let mut stack = Stack::new(Type::BlazeRod);
  stack.set_tag(MARKER_KEY, Tag::Byte(1));
  // No uses and no size: the marker says tool, the schema says otherwise.
  let item = ItemRef::new(stack);

  assert!(BiomeWand::from_item(&item, &biomes).is_none());
  let lore = plain_lore(&item);
  assert_eq!(lore[0], BROKEN_LABEL);
  assert_eq!(lore[1], "missing required property `biome_changer:uses_remaining`");

  // Clicking the broken item again must not stack up annotations.
  assert!(BiomeWand::from_item(&item, &biomes).is_none());
  assert_eq!(plain_lore(&item).len(), 2);
}

#[test]
fn test_undecodable_size_is_broken() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  item.edit(|stack| stack.set_tag(SIZE_KEY, Tag::String("MEDIUM".into())));
  assert!(BiomeWand::from_item(&item, &biomes).is_none());
  assert!(plain_lore(&item).contains(&BROKEN_LABEL.to_string()));
}

#[test]
fn test_undecodable_selection_is_broken() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  item.edit(|stack| stack.set_tag(SELECTED_BIOME_KEY, Tag::String("minecraft:gone".into())));
  assert!(BiomeWand::from_item(&item, &biomes).is_none());
}

#[test]
fn test_select_biome() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);
  let desert = biomes.get("minecraft:desert").unwrap();

  assert_eq!(wand.select_biome(desert), Ok(()));
  assert_eq!(wand.selected_biome(), Ok(Some(desert)));
  assert_eq!(plain_lore(&item)[0], "Biome: Desert");

  // Selecting the selected biome again is fine, and changes nothing else.
  assert_eq!(wand.select_biome(desert), Ok(()));
  assert_eq!(wand.selected_biome(), Ok(Some(desert)));
  assert_eq!(wand.uses_remaining(), Ok(2500));
  assert_eq!(wand.size(), Ok(Size::Small));
}

#[test]
fn test_select_illegal_biome() {
  let biomes = registry();
  let wand = wand(&fresh_item(&biomes), &biomes);

  for key in ILLEGAL_BIOMES {
    let biome = biomes.get(key).expect("denylisted biome should be registered");
    assert_eq!(wand.select_biome(biome), Err(UseError::IllegalBiome));
    assert_eq!(wand.selected_biome(), Ok(None));
  }
  assert_eq!(wand.uses_remaining(), Ok(2500));
}

#[test]
fn test_cycle_size() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);

  assert_eq!(wand.cycle_size(), Ok(Size::Large));
  assert_eq!(wand.size(), Ok(Size::Large));
  assert_eq!(plain_lore(&item)[2], "Size: large");

  // Period two: cycling twice is a no-op.
  assert_eq!(wand.cycle_size(), Ok(Size::Small));
  assert_eq!(wand.size(), Ok(Size::Small));
}

#[test]
fn test_apply_needs_a_selection() {
  let biomes = registry();
  let wand = wand(&fresh_item(&biomes), &biomes);
  let mut world = overworld(&biomes);

  let result = wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume"));
  assert_eq!(result, Err(UseError::NoBiomeSelected));
  assert_eq!(wand.uses_remaining(), Ok(2500));
  assert!(world.blocks.is_empty());
}

#[test]
fn test_apply_only_in_overworld() {
  let biomes = registry();
  let wand = wand(&fresh_item(&biomes), &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();

  for env in [Environment::Nether, Environment::End] {
    let mut world = overworld(&biomes);
    world.env = env;
    let result = wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume"));
    assert_eq!(result, Err(UseError::WrongWorld));
    assert!(world.blocks.is_empty());
  }
  assert_eq!(wand.uses_remaining(), Ok(2500));
}

#[test]
fn test_apply_needs_uses() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  item.edit(|stack| stack.set_tag(USES_KEY, Tag::Int(0)));
  let wand = wand(&item, &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();

  let mut world = overworld(&biomes);
  let result = wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume"));
  assert_eq!(result, Err(UseError::InsufficientUses));
  assert!(world.blocks.is_empty());

  // Large costs 3, so 2 uses are not enough for it even though they would
  // cover a small application.
  item.edit(|stack| stack.set_tag(USES_KEY, Tag::Int(2)));
  wand.cycle_size().unwrap();
  let result = wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume"));
  assert_eq!(result, Err(UseError::InsufficientUses));
}

#[test]
fn test_apply_repaints_footprint() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);
  let desert = biomes.get("minecraft:desert").unwrap();
  let plains = biomes.get("minecraft:plains").unwrap();
  wand.select_biome(desert).unwrap();

  let mut world = overworld(&biomes);
  let center = Pos::new(0, 64, 0);
  let columns = wand.apply_at(&mut world, center, || panic!("must not consume")).unwrap();

  // Small radius is 2: a 5x5 footprint.
  assert_eq!(columns.len(), 25);
  assert!(columns.contains(&Pos::new(-2, 64, 2)));

  // The flat world is all plains, so whole columns get repainted, top to
  // bottom, inside the footprint only.
  assert_eq!(world.biome_at(Pos::new(0, 64, 0)), desert);
  assert_eq!(world.biome_at(Pos::new(2, 319, 2)), desert);
  assert_eq!(world.biome_at(Pos::new(-2, -64, -2)), desert);
  assert_eq!(world.biome_at(Pos::new(3, 64, 0)), plains);
  assert_eq!(world.biome_at(Pos::new(0, 64, -3)), plains);

  assert_eq!(wand.uses_remaining(), Ok(2499));
  assert_eq!(plain_lore(&item)[1], "Uses: 2499");
}

#[test]
fn test_apply_large_footprint_and_cost() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();
  wand.cycle_size().unwrap();

  let mut world = overworld(&biomes);
  let columns = wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume")).unwrap();

  // Large radius is 5: an 11x11 footprint, at triple cost.
  assert_eq!(columns.len(), 121);
  assert_eq!(wand.uses_remaining(), Ok(2497));
}

#[test]
fn test_cost_accounting_over_time() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();

  let mut world = overworld(&biomes);
  for n in 1..=5 {
    wand.apply_at(&mut world, Pos::new(0, 64, 0), || panic!("must not consume")).unwrap();
    assert_eq!(wand.uses_remaining(), Ok(DEFAULT_USES - n));
  }
}

#[test]
fn test_tool_is_consumed_at_zero() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  item.edit(|stack| stack.set_tag(USES_KEY, Tag::Int(1)));
  let wand = wand(&item, &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();

  let mut world = overworld(&biomes);
  let consumed = Cell::new(false);
  wand.apply_at(&mut world, Pos::new(0, 64, 0), || consumed.set(true)).unwrap();
  assert!(consumed.get());
  assert_eq!(wand.uses_remaining(), Ok(0));
}

#[test]
fn test_large_application_can_consume() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  item.edit(|stack| stack.set_tag(USES_KEY, Tag::Int(3)));
  let wand = wand(&item, &biomes);
  wand.select_biome(biomes.get("minecraft:desert").unwrap()).unwrap();
  wand.cycle_size().unwrap();

  let mut world = overworld(&biomes);
  let consumed = Cell::new(false);
  wand.apply_at(&mut world, Pos::new(0, 64, 0), || consumed.set(true)).unwrap();
  assert!(consumed.get());
  assert_eq!(wand.uses_remaining(), Ok(0));
}

#[test]
fn test_contiguous_run_only() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  let wand = wand(&item, &biomes);
  let plains = biomes.get("minecraft:plains").unwrap();
  let desert = biomes.get("minecraft:desert").unwrap();
  let jungle = biomes.get("minecraft:jungle").unwrap();
  wand.select_biome(jungle).unwrap();

  // The clicked column is plains with a desert band one above the click.
  let mut world = TestWorld::new(Environment::Normal, 0, 5, plains);
  world.set_column(0, 0, 0, &[plains, plains, plains, desert, plains]);
  wand.apply_at(&mut world, Pos::new(0, 2, 0), || panic!("must not consume")).unwrap();
  assert_eq!(world.column(0, 0), vec![jungle, jungle, jungle, desert, plains]);
}

#[test]
fn test_size_survives_reconstruction() {
  let biomes = registry();
  let item = fresh_item(&biomes);
  wand(&item, &biomes).cycle_size().unwrap();

  // A fresh read of the same item sees the stored size.
  assert_eq!(wand(&item, &biomes).size(), Ok(Size::Large));
}
