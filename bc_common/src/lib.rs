#[macro_use]
extern crate log;

pub mod config;
pub mod math;
pub mod nbt;
pub mod util;

use log::LevelFilter;

/// Initializes the logger at `Info`. Might do more things in the future.
pub fn init(name: &str) { init_with_level(name, LevelFilter::Info) }

pub fn init_with_level(_name: &str, level: LevelFilter) {
  use log::{Level, Metadata, Record};

  struct Logger;

  impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        let now = chrono::Local::now();
        print!("{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
        match record.level() {
          Level::Trace => print!("[\x1b[36mTRACE\x1b[0m]"),
          Level::Debug => print!("[\x1b[34mDEBUG\x1b[0m]"),
          Level::Info => print!("[\x1b[32mINFO\x1b[0m]"),
          Level::Warn => print!("[\x1b[33mWARN\x1b[0m]"),
          Level::Error => print!("[\x1b[31m\x1b[1mERROR\x1b[0m]"),
        }
        println!(" {}", record.args());
      }
    }

    fn flush(&self) {}
  }

  static LOGGER: Logger = Logger;
  // A second init means some embedder already set a logger, which is fine.
  let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
