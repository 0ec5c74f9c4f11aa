use crate::utils::{read_file_content, relative_display_path};
use crate::CopyError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, trace};

/// Filesystem classification of a selected path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One user-selected path together with its classification.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl EntryPoint {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        EntryPoint { path, kind }
    }
}

/// Renders one file as `//<display path>` followed by its content on the
/// next line. The file's own line endings are passed through untouched.
pub async fn render_file(path: &Path, root: Option<&Path>) -> Result<String, CopyError> {
    trace!("Rendering file: {}", path.display());
    let content = read_file_content(path).await?;
    Ok(format!(
        "//{}\n{}",
        relative_display_path(path, root),
        content
    ))
}

/// Recursively renders every file under `dir`, joining the per-entry
/// results with a blank line in the order the directory listing yields
/// them. An empty directory renders as the empty string.
///
/// Entries are classified without following symlinks, so a link to a
/// directory is read as a file and surfaces as a `ReadError`. There is
/// no cycle guard; recursion is bounded only by the filesystem.
pub fn render_directory<'a>(
    dir: &'a Path,
    root: Option<&'a Path>,
) -> BoxFuture<'a, Result<String, CopyError>> {
    async move {
        trace!("Rendering directory: {}", dir.display());
        let mut entries = async_fs::read_dir(dir)
            .await
            .map_err(|err| CopyError::ReadError(format!("{}: {}", dir.display(), err)))?;

        let mut blocks: Vec<String> = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| CopyError::ReadError(format!("{}: {}", dir.display(), err)))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|err| CopyError::ReadError(format!("{}: {}", path.display(), err)))?;

            if file_type.is_dir() {
                blocks.push(render_directory(&path, root).await?);
            } else {
                blocks.push(render_file(&path, root).await?);
            }
        }

        Ok(blocks.join("\n\n"))
    }
    .boxed()
}

/// Renders every entry point in input order and joins the results with a
/// blank line. The first failure aborts the whole call; partial output is
/// never produced.
pub async fn aggregate(
    entry_points: &[EntryPoint],
    root: Option<&Path>,
) -> Result<String, CopyError> {
    let mut outputs: Vec<String> = Vec::with_capacity(entry_points.len());
    for entry in entry_points {
        debug!("Processing entry point: {}", entry.path.display());
        let rendered = match entry.kind {
            EntryKind::Directory => render_directory(&entry.path, root).await?,
            EntryKind::File => render_file(&entry.path, root).await?,
        };
        outputs.push(rendered);
    }
    Ok(outputs.join("\n\n"))
}
