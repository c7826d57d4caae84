use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Maximum catalog file size (10MB). The CSV scanner has no limit of its own.
pub const MAX_SOURCE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validate file size from an already-open handle (avoids a stat/open race)
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_SOURCE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_SOURCE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Read a catalog CSV file into memory after checking its size
pub fn read_source_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    // Bound the read as well, in case the file grows after the size check
    let mut content = String::new();
    file.take(MAX_SOURCE_SIZE_BYTES + 1).read_to_string(&mut content).with_context(|| {
        format!("Failed to read catalog file as UTF-8: {}", path.display())
    })?;

    if content.len() as u64 > MAX_SOURCE_SIZE_BYTES {
        bail!("File too large: {} (grew while reading)", path.display());
    }

    Ok(content)
}
