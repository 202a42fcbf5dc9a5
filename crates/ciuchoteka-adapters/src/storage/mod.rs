//! Key-value storage media.

mod file;
mod memory;

pub use file::FileMedium;
pub use memory::MemoryMedium;

/// Bytes an entry occupies: key length plus value length.
fn entry_size(key: &str, value_len: usize) -> u64 {
    (key.len() + value_len) as u64
}
