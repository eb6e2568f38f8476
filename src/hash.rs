//! BLAKE3 hashing for license acceptance records and component payloads

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;
use walkdir::WalkDir;

use crate::error::{Result, fs};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Hash a license text
///
/// Line endings are normalized so a text fetched on Windows hashes the same.
pub fn hash_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    format!(
        "{}{}",
        HASH_PREFIX,
        blake3::hash(normalized.trim().as_bytes()).to_hex()
    )
}

fn hash_file_into(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| fs::read_failed(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(())
}

/// Hash a component payload directory
///
/// Files are visited in path order so the digest does not depend on the
/// directory listing order of the file system.
pub fn hash_directory(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| fs::read_failed(path, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
        hasher.update(relative.to_string_lossy().replace('\\', "/").as_bytes());
        hash_file_into(&mut hasher, entry.path())?;
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}
