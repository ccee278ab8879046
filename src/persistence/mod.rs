// Persistence layer: the JSON archive file format and the store adapter.

pub mod reader;
pub mod records;
pub mod store;
pub mod writer;

pub use reader::ArchiveReader;
pub use store::JsonArchiveStore;
pub use writer::ArchiveWriter;
