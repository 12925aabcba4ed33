//! Navigation tree node.

use serde::{Deserialize, Serialize};

/// One node of the sidebar tree.
///
/// Serialized untagged so the output matches what the docs theme expects:
/// groups as `{"label", "items"}` and leaves as `{"label", "slug"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A directory with its ordered children.
    Group {
        /// Display label derived from the directory name.
        label: String,
        /// Child entries in navigation order.
        items: Vec<Entry>,
    },
    /// A single document.
    Leaf {
        /// Display label derived from the file name.
        label: String,
        /// Route path relative to the content root, without extension.
        slug: String,
    },
}

impl Entry {
    /// Create a group entry.
    #[must_use]
    pub fn group(label: impl Into<String>, items: Vec<Entry>) -> Self {
        Self::Group {
            label: label.into(),
            items,
        }
    }

    /// Create a leaf entry.
    #[must_use]
    pub fn leaf(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            slug: slug.into(),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    /// Child entries, or `None` for a leaf.
    #[must_use]
    pub fn items(&self) -> Option<&[Entry]> {
        match self {
            Self::Group { items, .. } => Some(items),
            Self::Leaf { .. } => None,
        }
    }

    /// Route slug, or `None` for a group.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Group { .. } => None,
            Self::Leaf { slug, .. } => Some(slug),
        }
    }

    /// True for directory entries.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Count leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Group { items, .. } => items.iter().map(Entry::leaf_count).sum(),
            Self::Leaf { .. } => 1,
        }
    }
}
