use snafu::{Snafu, location};
use tracing::{debug, error, info};

use crate::filesystem::{FolderNode, FolderPath};

/// Owns a folder tree together with the folder currently selected in it.
///
/// The selection is a path from the root, so the tree itself never carries
/// selection state. Files and subfolders are always added to the selected
/// folder.
#[derive(Debug, Clone)]
pub struct Session {
    root: FolderNode,
    selection: FolderPath,
}

impl Session {
    /// Creates a session over an empty root folder, which starts out selected.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::from_root(FolderNode::new(root_name))
    }

    pub fn from_root(root: FolderNode) -> Self {
        Self {
            root,
            selection: FolderPath::root(),
        }
    }

    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    pub fn current_path(&self) -> &FolderPath {
        &self.selection
    }

    pub fn current(&self) -> &FolderNode {
        match self.root.folder_at(&self.selection) {
            Some(folder) => folder,
            None => {
                error!(
                    "Assumption that the selection {:?} always resolves failed {}",
                    self.selection,
                    location!()
                );
                &self.root
            }
        }
    }

    fn current_mut(&mut self) -> &mut FolderNode {
        if self.root.folder_at(&self.selection).is_none() {
            error!(
                "Assumption that the selection {:?} always resolves failed {}",
                self.selection,
                location!()
            );
            self.selection = FolderPath::root();
        }
        self.root.nearest_folder_mut(&self.selection)
    }

    pub fn add_file(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        let current = self.current_mut();
        debug!("Adding file '{}' to folder '{}'", file_name, current.name());
        current.add_file(file_name);
    }

    pub fn add_subfolder(&mut self, folder_name: impl Into<String>) {
        let subfolder = FolderNode::new(folder_name);
        let current = self.current_mut();
        debug!(
            "Adding subfolder '{}' to folder '{}'",
            subfolder.name(),
            current.name()
        );
        current.add_subfolder(subfolder);
    }

    /// Makes the first folder named `name` (ignoring case) the current one.
    ///
    /// The whole tree is searched from the root. When nothing matches, the
    /// selection is left untouched.
    pub fn select_folder(&mut self, name: &str) -> Result<&FolderNode, SelectionError> {
        let Some(path) = self.root.find_folder(name) else {
            info!("Folder '{}' not found, keeping current selection", name);
            return FolderNotFoundSnafu { name }.fail();
        };

        debug!("Selecting folder '{}' at {:?}", name, path);
        self.selection = path;
        Ok(self.current())
    }

    pub fn render_current(&self) -> String {
        self.current().render()
    }

    pub fn total_files(&self) -> usize {
        self.root.count_files()
    }

    /// Folder names from the root down to the current selection.
    pub fn breadcrumb(&self) -> String {
        self.root.names_along(&self.selection).join(" / ")
    }
}

#[derive(Debug, Snafu)]
pub enum SelectionError {
    #[snafu(display("Folder '{}' not found", name))]
    FolderNotFound { name: String },
}
