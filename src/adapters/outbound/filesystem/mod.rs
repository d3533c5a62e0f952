/// Filesystem adapters for reading the source documents
mod file_reader;

pub use file_reader::FileSystemReader;
