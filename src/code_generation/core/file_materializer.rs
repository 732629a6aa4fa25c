use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::shared::error::{ScaffoldError, ScaffoldResult};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// What to do when the target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Create or truncate
    Always,
    /// Leave an existing file untouched
    IfAbsent,
}

/// Creates directories and files for generated sources
pub struct FileMaterializer;

impl FileMaterializer {
    /// Create `path` and any missing parents; an existing directory is fine
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> ScaffoldResult<()> {
        let path = path.as_ref();
        if path.is_dir() {
            return Ok(());
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }

        builder.create(path).map_err(|e| ScaffoldError::io(path, e))?;
        tracing::debug!(path = %path.display(), "created directory");
        Ok(())
    }

    /// Open `path` for writing under `policy`.
    ///
    /// Returns `None` when the policy is `IfAbsent` and the file exists.
    pub fn ensure_file<P: AsRef<Path>>(path: P, policy: OverwritePolicy) -> ScaffoldResult<Option<File>> {
        let path = path.as_ref();
        if policy == OverwritePolicy::IfAbsent && path.exists() {
            tracing::debug!(path = %path.display(), "file exists, keeping it");
            return Ok(None);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::ensure_dir(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        match policy {
            OverwritePolicy::Always => options.create(true).truncate(true),
            OverwritePolicy::IfAbsent => options.create_new(true),
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let file = options.open(path).map_err(|e| ScaffoldError::io(path, e))?;
        Ok(Some(file))
    }

    /// Render and write a file in one step.
    ///
    /// `render` only runs once the policy allows writing, and the file is opened
    /// after rendering succeeds so a template failure never leaves a partial file.
    /// Returns whether the file was written.
    pub fn materialize<P, F>(path: P, policy: OverwritePolicy, render: F) -> ScaffoldResult<bool>
    where
        P: AsRef<Path>,
        F: FnOnce() -> ScaffoldResult<Vec<u8>>,
    {
        let path = path.as_ref();
        if policy == OverwritePolicy::IfAbsent && path.exists() {
            tracing::debug!(path = %path.display(), "file exists, skipping render");
            return Ok(false);
        }

        let content = render()?;
        match Self::ensure_file(path, policy)? {
            Some(mut file) => {
                file.write_all(&content).map_err(|e| ScaffoldError::io(path, e))?;
                tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the content of `path` through a uniquely named sibling
    /// temporary file that is renamed over it. The target keeps its permissions.
    pub fn replace<P: AsRef<Path>>(path: P, content: &[u8]) -> ScaffoldResult<()> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        tmp.write_all(content).map_err(|e| ScaffoldError::io(tmp.path(), e))?;
        let permissions = match fs::metadata(path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(_) => Self::default_file_permissions(),
        };
        if let Some(permissions) = permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| ScaffoldError::io(tmp.path(), e))?;
        }

        // dropping the temp file on error removes it
        tmp.persist(path).map_err(|e| ScaffoldError::io(path, e.error))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "replaced file");
        Ok(())
    }

    #[cfg(unix)]
    fn default_file_permissions() -> Option<fs::Permissions> {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(FILE_MODE))
    }

    #[cfg(not(unix))]
    fn default_file_permissions() -> Option<fs::Permissions> {
        None
    }

    /// Read a whole file
    pub fn read<P: AsRef<Path>>(path: P) -> ScaffoldResult<Vec<u8>> {
        let path = path.as_ref();
        fs::read(path).map_err(|e| ScaffoldError::io(path, e))
    }
}
