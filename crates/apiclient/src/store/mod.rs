mod file;
mod memory;

pub use self::file::FileSessionStore;
pub use self::memory::MemorySessionStore;
