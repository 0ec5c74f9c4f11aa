use crate::CopyError;
use std::path::Path;
use tokio::fs as async_fs;

/// Display path for a file, relative to the root when one is known.
///
/// Without a root there is nothing to be relative to, so only the final
/// path segment is used. Separators are normalized to `/` either way.
pub fn relative_display_path(path: &Path, root: Option<&Path>) -> String {
    match root {
        Some(root) => {
            let relative = path.strip_prefix(root).unwrap_or(path);
            relative.to_string_lossy().replace('\\', "/")
        }
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().replace('\\', "/")),
    }
}

/// Reads a file as UTF-8 text. Invalid byte sequences are replaced with
/// U+FFFD rather than treated as an error.
pub async fn read_file_content(path: &Path) -> Result<String, CopyError> {
    let bytes = async_fs::read(path)
        .await
        .map_err(|err| CopyError::ReadError(format!("{}: {}", path.display(), err)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
