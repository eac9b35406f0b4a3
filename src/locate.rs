//! Path resolution: ARC root directory and the fixed input/output locations.

use std::io;
use std::path::{Path, PathBuf};

/// Location of the investigation file inside an ARC root.
pub const INVESTIGATION_SUFFIX: &str = ".arc/Json/isa.investigation.json";

/// Name of the generated metadata file.
pub const METADATA_FILE_NAME: &str = "ro-crate-metadata.json";

/// Resolve the user-supplied path to an absolute ARC root directory.
///
/// An empty path means the current working directory; a relative path is
/// joined onto it; an absolute path is used as-is.
pub fn resolve_root(arg: &Path) -> io::Result<PathBuf> {
    if arg.as_os_str().is_empty() {
        return std::env::current_dir();
    }
    if arg.is_absolute() {
        Ok(arg.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(arg))
    }
}

/// Path of the investigation file under an ARC root.
pub fn investigation_path(root: &Path) -> PathBuf {
    root.join(INVESTIGATION_SUFFIX)
}

/// Path of the generated metadata file under an ARC root.
pub fn metadata_path(root: &Path) -> PathBuf {
    root.join(METADATA_FILE_NAME)
}
