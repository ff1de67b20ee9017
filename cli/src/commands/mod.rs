//! CLI Commands
//!
//! Each subcommand lives in its own module; the file-streaming loop they
//! share lives here.

mod check;
mod hash;
mod info;

pub use check::check_mode;
pub use hash::hash_files;
pub use info::print_info;

use std::io::Read;
use std::path::Path;

/// Stream a file through the engine in 128 KB chunks and return the hex
/// digest.
pub(crate) fn digest_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = verushash::Hasher::new();
    let mut buffer = [0u8; 128 * 1024];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

// =============================================================================
// TESTS
// =============================================================================
