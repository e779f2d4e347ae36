use std::fmt;

use derive_more::Constructor;

use super::FolderNode;

/// Prefix repeated once per nesting level in front of every rendered line.
pub const INDENT_MARKER: &str = "----";

/// Lazy indented rendering of a folder subtree.
///
/// Each folder produces a `Folder: <name>` line at its depth, then one
/// `File: <file>` line per file one level deeper, then its subfolders,
/// depth-first and in insertion order.
#[derive(Debug, Clone, Copy, Constructor)]
pub struct Rendered<'a> {
    folder: &'a FolderNode,
    depth: usize,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = INDENT_MARKER.repeat(self.depth);
        writeln!(f, "{indent}Folder: {}", self.folder.name())?;

        for file in self.folder.files() {
            writeln!(f, "{indent}{INDENT_MARKER}File: {file}")?;
        }

        for subfolder in self.folder.subfolders() {
            write!(f, "{}", Rendered::new(subfolder, self.depth + 1))?;
        }

        Ok(())
    }
}
