pub mod config_writer;
pub mod servable_scanner;

pub use config_writer::ConfigWriter;
pub use servable_scanner::ServableScanner;
