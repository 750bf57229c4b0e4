pub mod config_file_writer;
pub mod directory_scanner;

pub use config_file_writer::ConfigFileWriter;
pub use directory_scanner::DirectoryScanner;
