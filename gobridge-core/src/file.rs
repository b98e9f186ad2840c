use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
};

/// Create (or truncate) the file at `path`, creating missing parent directories.
///
/// Fails when a path segment is an existing non-directory, or when `path`
/// itself is an existing directory.
pub fn create_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Append `bytes` to `file` and persist them before returning.
pub fn append_synced(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_data()
}
