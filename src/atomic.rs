//! Temp-file-then-rename writes
//!
//! Both the dictionary and the generated JS module are replaced this way, so a
//! reader never observes a half-written file and a failed run leaves the
//! previous content in place.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Write `path` by running `write` against a temporary sibling file and
/// renaming it into place once `write` and the flush have succeeded.
///
/// When `write` fails the temporary file is removed and `path` is not touched.
/// An existing file's permissions are carried over to the replacement; a new
/// file gets `0644` on unix instead of the temp file's private `0600`.
pub fn write_atomically<F, E>(path: &Path, write: F) -> Result<(), E>
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
    E: From<io::Error>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    match fs::metadata(path) {
        Ok(metadata) => temp.as_file().set_permissions(metadata.permissions())?,
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(NEW_FILE_MODE))?
        }
        #[cfg(not(unix))]
        Err(_) => {}
    }

    temp.persist(path).map_err(io::Error::from)?;
    Ok(())
}
