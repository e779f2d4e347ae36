use std::fmt;

use tracing::{debug, trace};

use crate::ext::CaseInsensitiveExt;

use super::{FolderPath, Rendered};

/// A folder owning an ordered list of file names and an ordered list of
/// child folders.
///
/// Names are compared case-insensitively and need not be unique: duplicate
/// or empty file and folder names are accepted as-is.
#[derive(Debug, Clone, Default)]
pub struct FolderNode {
    name: String,
    files: Vec<String>,
    subfolders: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_contents(name, Vec::new(), Vec::new())
    }

    pub fn with_contents(
        name: impl Into<String>,
        files: Vec<String>,
        subfolders: Vec<FolderNode>,
    ) -> Self {
        Self {
            name: name.into(),
            files,
            subfolders,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn subfolders(&self) -> &[FolderNode] {
        &self.subfolders
    }

    pub fn add_file(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        if self.files.contains(&file_name) {
            debug!(
                "Folder '{}' already contains a file named '{}'",
                self.name, file_name
            );
        }
        self.files.push(file_name);
    }

    pub fn add_subfolder(&mut self, subfolder: FolderNode) {
        if self.subfolders.iter().any(|sibling| sibling.same_name_as(&subfolder)) {
            debug!(
                "Folder '{}' already contains a subfolder named '{}'",
                self.name, subfolder.name
            );
        }
        self.subfolders.push(subfolder);
    }

    /// Name identity with another folder. Files and subfolders are ignored.
    pub fn same_name_as(&self, other: &FolderNode) -> bool {
        self.has_name(&other.name)
    }

    pub fn has_name(&self, label: &str) -> bool {
        self.name.eq_ignore_case(label)
    }

    /// Total number of files in this folder and all of its descendants.
    pub fn count_files(&self) -> usize {
        self.files.len()
            + self
                .subfolders
                .iter()
                .map(FolderNode::count_files)
                .sum::<usize>()
    }

    /// Number of folders in this subtree, this one included.
    pub fn folder_count(&self) -> usize {
        1 + self
            .subfolders
            .iter()
            .map(FolderNode::folder_count)
            .sum::<usize>()
    }

    /// Locates the first folder named `name` (ignoring case) in this subtree.
    ///
    /// The folder itself is checked first. Then all of its direct subfolders
    /// are checked by name, in order, before any of them is descended into;
    /// the descent then proceeds subfolder by subfolder with the same rule,
    /// and the first branch that yields a match wins.
    pub fn find_folder(&self, name: &str) -> Option<FolderPath> {
        if self.has_name(name) {
            return Some(FolderPath::root());
        }

        let mut indices = Vec::new();
        self.locate_below(name, &mut indices)
            .then(|| FolderPath::from(indices))
    }

    fn locate_below(&self, name: &str, indices: &mut Vec<usize>) -> bool {
        trace!("Searching subfolders of '{}' for '{}'", self.name, name);
        if let Some(index) = self
            .subfolders
            .iter()
            .position(|subfolder| subfolder.has_name(name))
        {
            indices.push(index);
            return true;
        }

        for (index, subfolder) in self.subfolders.iter().enumerate() {
            indices.push(index);
            if subfolder.locate_below(name, indices) {
                return true;
            }
            indices.pop();
        }

        false
    }

    pub fn folder_at(&self, path: &FolderPath) -> Option<&FolderNode> {
        path.iter()
            .try_fold(self, |folder, &index| folder.subfolders.get(index))
    }

    /// Follows `path` as far as it stays inside the tree and returns the
    /// deepest folder reached.
    pub fn nearest_folder_mut(&mut self, path: &FolderPath) -> &mut FolderNode {
        let mut folder = self;
        for &index in path.iter() {
            if index >= folder.subfolders.len() {
                break;
            }
            folder = &mut folder.subfolders[index];
        }
        folder
    }

    /// Names of the folders along `path`, starting with this one.
    /// Stops early if `path` leaves the tree.
    pub fn names_along(&self, path: &FolderPath) -> Vec<&str> {
        let mut names = vec![self.name()];
        let mut folder = self;
        for &index in path.iter() {
            match folder.subfolders.get(index) {
                Some(subfolder) => {
                    names.push(subfolder.name());
                    folder = subfolder;
                }
                None => break,
            }
        }
        names
    }

    pub fn rendered(&self) -> Rendered<'_> {
        Rendered::new(self, 0)
    }

    pub fn render(&self) -> String {
        self.rendered().to_string()
    }
}

impl fmt::Display for FolderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn folder(name: &str, subfolders: Vec<FolderNode>) -> FolderNode {
        FolderNode::with_contents(name, Vec::new(), subfolders)
    }

    fn path(indices: &[usize]) -> FolderPath {
        FolderPath::from(indices.to_vec())
    }

    #[test]
    fn test_new_folder_is_empty() {
        let root = FolderNode::new("Start Folder");
        assert_eq!(root.name(), "Start Folder");
        assert!(root.files().is_empty());
        assert!(root.subfolders().is_empty());
        assert_eq!(root.count_files(), 0);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let root = FolderNode::new("");
        assert_eq!(root.name(), "");
        assert!(root.has_name(""));
    }

    #[test]
    fn test_default_contents_are_not_shared() {
        let mut first = FolderNode::new("first");
        let second = FolderNode::new("second");
        first.add_file("only-in-first");
        first.add_subfolder(FolderNode::new("child"));

        assert!(second.files().is_empty());
        assert!(second.subfolders().is_empty());
    }

    #[test]
    fn test_add_file_preserves_order_and_duplicates() {
        let mut root = FolderNode::new("root");
        root.add_file("b.txt");
        root.add_file("a.txt");
        root.add_file("b.txt");
        root.add_file("");

        assert_eq!(root.files(), ["b.txt", "a.txt", "b.txt", ""]);
    }

    #[test]
    fn test_add_subfolder_preserves_order_and_duplicates() {
        let mut root = FolderNode::new("root");
        root.add_subfolder(FolderNode::new("Docs"));
        root.add_subfolder(FolderNode::new("Music"));
        root.add_subfolder(FolderNode::new("DOCS"));

        let names = root
            .subfolders()
            .iter()
            .map(FolderNode::name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Docs", "Music", "DOCS"]);
    }

    #[test]
    fn test_count_files_direct_and_nested() {
        let deep = FolderNode::with_contents("deep", vec!["d1".into(), "d2".into()], Vec::new());
        let middle = FolderNode::with_contents("middle", vec!["m1".into()], vec![deep]);
        let sibling = FolderNode::with_contents("sibling", vec!["s1".into()], Vec::new());
        let root = FolderNode::with_contents(
            "root",
            vec!["r1".into(), "r2".into(), "r3".into()],
            vec![middle, sibling],
        );

        assert_eq!(root.count_files(), 3 + 1 + 2 + 1);
        assert_eq!(root.folder_count(), 4);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(50)]
    fn test_count_files_independent_of_depth(#[case] depth: usize) {
        let mut chain = FolderNode::with_contents("leaf", vec!["leaf.txt".into()], Vec::new());
        for level in 0..depth {
            chain = folder(&format!("level{level}"), vec![chain]);
        }
        let mut root = FolderNode::new("root");
        root.add_file("top.txt");
        root.add_subfolder(chain);

        assert_eq!(root.count_files(), 2);
    }

    #[rstest]
    #[case("Docs", "docs")]
    #[case("Docs", "DOCS")]
    #[case("Docs", "Docs")]
    fn test_same_name_as_ignores_case(#[case] left: &str, #[case] right: &str) {
        let a = FolderNode::new(left);
        let b = FolderNode::new(right);
        assert!(a.same_name_as(&b));
        assert!(b.same_name_as(&a));
    }

    #[test]
    fn test_same_name_as_ignores_contents() {
        let a = FolderNode::with_contents("Docs", vec!["a".into()], Vec::new());
        let b = FolderNode::with_contents("docs", Vec::new(), vec![FolderNode::new("x")]);
        assert!(a.same_name_as(&b));
        assert!(!a.same_name_as(&FolderNode::new("Doc")));
    }

    #[test]
    fn test_has_name_ignores_case() {
        let docs = FolderNode::new("Docs");
        assert!(docs.has_name("docs"));
        assert!(docs.has_name("DOCS"));
        assert!(!docs.has_name("documents"));
    }

    #[test]
    fn test_find_folder_matches_self_first() {
        let root = folder("Docs", vec![folder("docs", Vec::new())]);
        assert_eq!(root.find_folder("DOCS"), Some(FolderPath::root()));
    }

    #[test]
    fn test_find_folder_prefers_direct_subfolder_over_grandchild() {
        let root = folder(
            "root",
            vec![folder("A", vec![folder("target", Vec::new())]), folder("Target", Vec::new())],
        );
        assert_eq!(root.find_folder("target"), Some(path(&[1])));
    }

    #[test]
    fn test_find_folder_finishes_earlier_branch_first() {
        let root = folder(
            "root",
            vec![
                folder("A", vec![folder("B", vec![folder("x", Vec::new())])]),
                folder("C", vec![folder("X", Vec::new())]),
            ],
        );
        assert_eq!(root.find_folder("x"), Some(path(&[0, 0, 0])));
    }

    #[test]
    fn test_find_folder_first_duplicate_wins() {
        let root = folder("root", vec![folder("dup", Vec::new()), folder("DUP", Vec::new())]);
        assert_eq!(root.find_folder("Dup"), Some(path(&[0])));
    }

    #[test]
    fn test_find_folder_missing() {
        let root = folder("root", vec![folder("A", vec![folder("B", Vec::new())])]);
        assert_eq!(root.find_folder("missing"), None);
    }

    #[test]
    fn test_folder_at_resolves_found_path() {
        let root = folder(
            "root",
            vec![folder("A", Vec::new()), folder("B", vec![folder("Deep", Vec::new())])],
        );
        let found = root.find_folder("deep").unwrap();

        assert_eq!(root.folder_at(&found).map(FolderNode::name), Some("Deep"));
        assert_eq!(root.folder_at(&FolderPath::root()).map(FolderNode::name), Some("root"));
        assert!(root.folder_at(&path(&[5])).is_none());
        assert!(root.folder_at(&path(&[1, 0, 0])).is_none());
    }

    #[test]
    fn test_nearest_folder_mut_allows_nested_mutation() {
        let mut root = folder("root", vec![folder("A", vec![folder("B", Vec::new())])]);
        root.nearest_folder_mut(&path(&[0, 0])).add_file("nested.txt");

        assert_eq!(root.count_files(), 1);
        assert_eq!(root.subfolders()[0].subfolders()[0].files(), ["nested.txt"]);
    }

    #[test]
    fn test_nearest_folder_mut_stops_at_last_valid_index() {
        let mut root = folder("root", vec![folder("A", Vec::new())]);
        assert_eq!(root.nearest_folder_mut(&path(&[0, 4])).name(), "A");
        assert_eq!(root.nearest_folder_mut(&path(&[7])).name(), "root");
    }

    #[test]
    fn test_names_along_path() {
        let root = folder("root", vec![folder("A", vec![folder("B", Vec::new())])]);
        assert_eq!(root.names_along(&path(&[0, 0])), ["root", "A", "B"]);
        assert_eq!(root.names_along(&FolderPath::root()), ["root"]);
        assert_eq!(root.names_along(&path(&[0, 3])), ["root", "A"]);
    }
}
