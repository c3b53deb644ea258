/// A particle kind. Only the kinds the plugin spawns are named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
  Flame,
  Smoke,
  HappyVillager,
}

impl Particle {
  /// Returns the name of this particle. This is something like `flame`.
  /// These don't have namespaces, because there aren't any namespaces for
  /// these on vanilla.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Flame => "flame",
      Self::Smoke => "smoke",
      Self::HappyVillager => "happy_villager",
    }
  }
}
