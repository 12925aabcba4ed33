//! Sidebar construction by filesystem walking.
//!
//! The walk is depth-first and synchronous. Each directory is read once, its
//! children filtered and sorted, and the resulting entries assembled bottom-up
//! so every [`Entry::Group`] is complete when it is created.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::collate;
use crate::entry::Entry;
use crate::error::SidebarError;
use crate::label::format_label;

/// Document extensions, longest first so stripping `.mdx` never leaves an `x`.
const DOCUMENT_EXTENSIONS: [&str; 2] = [".mdx", ".md"];

/// A directory child that survived filtering.
struct DirItem {
    name: String,
    is_dir: bool,
}

/// Builds the sidebar tree for a content root.
///
/// ```no_run
/// # fn main() -> Result<(), sidenav_tree::SidebarError> {
/// use sidenav_tree::SidebarBuilder;
///
/// let sidebar = SidebarBuilder::new("src/content/docs").build()?;
/// for entry in &sidebar {
///     println!("{}", entry.label());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    root: PathBuf,
}

impl SidebarBuilder {
    /// Create a builder for the given content root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root this builder walks.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the content root and return the ordered top-level entries.
    ///
    /// The root `index.md`/`index.mdx` is the landing page and is left out.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotFound`] or [`SidebarError::NotADirectory`] if
    /// the root is unusable, and [`SidebarError::Io`] if any directory in the
    /// tree cannot be read.
    pub fn build(&self) -> Result<Vec<Entry>, SidebarError> {
        let metadata = fs::metadata(&self.root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SidebarError::NotFound(self.root.clone()),
            _ => SidebarError::io(&self.root, e),
        })?;
        if !metadata.is_dir() {
            return Err(SidebarError::NotADirectory(self.root.clone()));
        }

        let entries = build_dir(&self.root, "", None)?;
        tracing::info!(
            root = %self.root.display(),
            entries = entries.len(),
            documents = entries.iter().map(Entry::leaf_count).sum::<usize>(),
            "Built sidebar"
        );
        Ok(entries)
    }
}

/// Build the sidebar for `root`.
///
/// Shorthand for `SidebarBuilder::new(root).build()`.
pub fn build(root: impl AsRef<Path>) -> Result<Vec<Entry>, SidebarError> {
    SidebarBuilder::new(root.as_ref()).build()
}

/// Build entries for one directory.
///
/// `dir_name` is the raw name of `dir`, or `None` at the content root.
fn build_dir(
    dir: &Path,
    base_slug: &str,
    dir_name: Option<&str>,
) -> Result<Vec<Entry>, SidebarError> {
    let items = read_items(dir, dir_name.is_none())?;
    tracing::debug!(dir = %dir.display(), count = items.len(), "Reading directory");

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let stem = strip_document_ext(&item.name);
        let slug = join_slug(base_slug, stem);

        if item.is_dir {
            let children = build_dir(&dir.join(&item.name), &slug, Some(&item.name))?;
            entries.push(Entry::group(format_label(&item.name), children));
        } else if is_document(&item.name) {
            entries.push(Entry::leaf(leaf_label(stem, dir_name), slug));
        } else {
            tracing::trace!(name = %item.name, "Skipping non-document file");
        }
    }

    warn_duplicate_labels(dir, &entries);
    Ok(entries)
}

/// List, filter and sort the children of `dir`.
fn read_items(dir: &Path, is_root: bool) -> Result<Vec<DirItem>, SidebarError> {
    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SidebarError::io(dir, e))? {
        let entry = entry.map_err(|e| SidebarError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_hidden(&name) || (is_root && is_root_index(&name)) {
            tracing::trace!(name = %name, "Skipping excluded entry");
            continue;
        }

        // Type of the entry itself; symlinks are not followed
        let is_dir = entry
            .file_type()
            .map_err(|e| SidebarError::io(dir, e))?
            .is_dir();
        items.push(DirItem { name, is_dir });
    }

    items.sort_by(|a, b| collate::compare(&a.name, &b.name));
    Ok(items)
}

/// Drafts (`_name`) and hidden files (`.name`).
fn is_hidden(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

fn is_root_index(name: &str) -> bool {
    matches!(name.to_lowercase().as_str(), "index.md" | "index.mdx")
}

fn is_document(name: &str) -> bool {
    DOCUMENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Remove a trailing `.md`/`.mdx`, if any.
fn strip_document_ext(name: &str) -> &str {
    DOCUMENT_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

/// Append a path segment to a slug.
///
/// Examples:
/// - `""`, `"guide"` -> `"guide"`
/// - `"setup"`, `"install"` -> `"setup/install"`
fn join_slug(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_owned()
    } else {
        format!("{base}/{segment}")
    }
}

/// Label for a document.
///
/// A nested `index` document is its directory's landing page and carries the
/// directory's label.
fn leaf_label(stem: &str, dir_name: Option<&str>) -> String {
    match dir_name {
        Some(dir) if stem.eq_ignore_ascii_case("index") => format_label(dir),
        _ => format_label(stem),
    }
}

/// Siblings may normalize to the same label (`01-setup` and `setup`); both
/// are kept.
fn warn_duplicate_labels(dir: &Path, entries: &[Entry]) {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.label()) {
            tracing::warn!(
                dir = %dir.display(),
                label = entry.label(),
                "Duplicate sidebar label among siblings"
            );
        }
    }
}
