//! In-memory folder tree.
//!
//! A [`FolderNode`] owns its file names and its child folders, forming a
//! strict tree. Nodes are addressed from the root by a [`FolderPath`] of
//! child indices, and rendered as indented text through [`Rendered`].

mod folder_path;
mod render;
mod tree;

pub use folder_path::FolderPath;
pub use render::Rendered;
pub use tree::FolderNode;
