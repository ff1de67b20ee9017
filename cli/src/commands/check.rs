//! Check Command
//!
//! Verify digests from a checksum file (like sha256sum -c).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// CHECK
// =============================================================================

/// Verify digests from a checksum file.
pub fn check_mode(checksum_file: &PathBuf) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "digest  filename" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            eprintln!("Warning: Invalid format: {}", line);
            continue;
        }

        let expected_digest = parts[0].trim();
        let file_path = parts[1].trim();
        total += 1;

        match super::digest_file(Path::new(file_path)) {
            Ok(actual_digest) if actual_digest == expected_digest => {
                println!("{}: OK", file_path);
            }
            Ok(_) => {
                println!("{}: FAILED", file_path);
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({})", file_path, e);
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {} digests verified", total);
    } else {
        eprintln!("WARNING: {} of {} digests did NOT match", failed, total);
        std::process::exit(1);
    }

    Ok(())
}
