pub mod aggregate;
pub mod copy;
pub mod errors;
pub mod logger;
pub mod utils;

pub use aggregate::{aggregate, render_directory, render_file, EntryKind, EntryPoint};
pub use copy::{aggregate_selection, copy_paths_to_clipboard, resolve_entry_points};
pub use copy::{PathContentCopier, PathCopierConfig};
pub use errors::CopyError;
