use crate::aggregate::{aggregate, EntryKind, EntryPoint};
use crate::CopyError;
use arboard::Clipboard;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tiktoken_rs::get_bpe_from_model;
use tokio::fs as async_fs;
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct PathCopierConfig {
    pub root: Option<PathBuf>,
    pub model: String,
    pub no_stats: bool,
}

#[async_trait]
pub trait PathContentCopier {
    async fn copy_paths_to_clipboard(&self, paths: Vec<String>) -> Result<(), CopyError>;
}

pub struct BasicPathContentCopier {
    config: PathCopierConfig,
}

impl BasicPathContentCopier {
    pub fn new(config: PathCopierConfig) -> Self {
        BasicPathContentCopier { config }
    }
}

#[async_trait]
impl PathContentCopier for BasicPathContentCopier {
    async fn copy_paths_to_clipboard(&self, paths: Vec<String>) -> Result<(), CopyError> {
        let config = &self.config;
        let payload = aggregate_selection(&paths, config.root.as_deref()).await?;

        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| CopyError::ClipboardInitError(e.to_string()))?;

        if !config.no_stats {
            trace!("Encoding payload to get token count");
            let tokenizer = get_bpe_from_model(&config.model)
                .map_err(|e| CopyError::TokenizerModelError(e.to_string()))?;
            let tokens = tokenizer.encode_ordinary(&payload);
            info!("Payload is {} bytes ({} tokens)", payload.len(), tokens.len());
        }

        clipboard
            .set_text(payload)
            .map_err(|e| CopyError::ClipboardWriteError(e.to_string()))?;

        if paths.len() > 1 {
            info!("{} items copied to clipboard", paths.len());
        } else {
            info!("Path and content copied to clipboard");
        }
        Ok(())
    }
}

/// Classifies each selected path by querying filesystem metadata. An
/// empty selection is rejected here, before any rendering starts.
pub async fn resolve_entry_points(paths: &[String]) -> Result<Vec<EntryPoint>, CopyError> {
    if paths.is_empty() {
        return Err(CopyError::NoSelection);
    }

    let mut entry_points = Vec::with_capacity(paths.len());
    for path in paths {
        let path = PathBuf::from(path);
        let metadata = async_fs::metadata(&path)
            .await
            .map_err(|e| CopyError::ReadError(format!("{}: {}", path.display(), e)))?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        trace!("Resolved {} as {:?}", path.display(), kind);
        entry_points.push(EntryPoint::new(path, kind));
    }
    debug!("Resolved {} entry points", entry_points.len());
    Ok(entry_points)
}

/// Selection resolution followed by aggregation: the whole pipeline short
/// of the clipboard itself.
pub async fn aggregate_selection(
    paths: &[String],
    root: Option<&Path>,
) -> Result<String, CopyError> {
    let entry_points = resolve_entry_points(paths).await?;
    aggregate(&entry_points, root).await
}

pub async fn copy_paths_to_clipboard(
    config: PathCopierConfig,
    paths: Vec<String>,
) -> Result<(), CopyError> {
    let copier = BasicPathContentCopier::new(config);
    copier.copy_paths_to_clipboard(paths).await
}
