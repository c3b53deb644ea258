mod stack;
mod ty;

pub use stack::{ItemData, ItemDisplay, Stack};
pub use ty::Type;

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A shared handle to an item. The host owns the real item; everything in
/// this crate reads and writes it through one of these, so that all views of
/// the same item agree.
#[derive(Clone)]
pub struct ItemRef {
  stack: Arc<Mutex<Stack>>,
}

impl ItemRef {
  pub fn new(stack: Stack) -> Self { ItemRef { stack: Arc::new(Mutex::new(stack)) } }

  /// Locks the item for reading. Keep the guard short-lived.
  pub fn lock(&self) -> MutexGuard<'_, Stack> { self.stack.lock() }

  /// Runs `f` with the item locked. This is the edit scope: everything `f`
  /// does becomes visible to other readers at once, when the lock drops.
  pub fn edit<R>(&self, f: impl FnOnce(&mut Stack) -> R) -> R { f(&mut self.stack.lock()) }

  /// Returns a copy of the item as it is right now.
  pub fn snapshot(&self) -> Stack { self.stack.lock().clone() }
}
