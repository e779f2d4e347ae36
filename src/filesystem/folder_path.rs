use derive_more::{Deref, From, Into};

/// Child indices leading from a root folder to one of its descendants.
///
/// The empty path addresses the root itself. Since folders are never removed
/// or reordered, a path stays valid for as long as the tree it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From, Into)]
pub struct FolderPath(Vec<usize>);

impl FolderPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}
