//! Tree derivation over the flat folder list.
//!
//! The API hands out folders as a flat list where each record points at its
//! parent. [`FolderIndex`] turns that list into a parent → children map once,
//! so rendering walks the hierarchy without rescanning the list per node.
//! Which nodes are open is tracked separately in an [`ExpandedSet`].

use std::collections::{HashMap, HashSet};

use foldertree_core::types::FolderId;

use super::model::Folder;

/// Set of folder ids whose children are currently shown.
///
/// Every folder starts collapsed; [`ExpandedSet::toggle`] flips a single node
/// between collapsed and expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    ids: HashSet<FolderId>,
}

impl ExpandedSet {
    /// Create an empty set (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state of `id`. Returns `true` if the node is now expanded.
    pub fn toggle(&mut self, id: FolderId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Expand `id`, leaving it expanded if it already was.
    pub fn expand(&mut self, id: FolderId) {
        self.ids.insert(id);
    }

    /// Collapse `id`.
    pub fn collapse(&mut self, id: FolderId) {
        self.ids.remove(&id);
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.ids.contains(&id)
    }

    /// Drop every id rejected by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(FolderId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether every node is collapsed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<FolderId> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = FolderId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// One visible line of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    /// The folder shown on this line.
    pub folder: &'a Folder,
    /// Nesting level, 0 for top-level folders.
    pub depth: usize,
    /// Whether the folder has at least one child.
    pub has_children: bool,
    /// Whether the folder is expanded.
    pub is_expanded: bool,
}

/// Parent → children index over a flat folder list.
///
/// Children keep the order in which they appear in the list. The index is
/// derived data: rebuild it whenever the list changes.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex {
    folders: Vec<Folder>,
    by_id: HashMap<FolderId, usize>,
    children: HashMap<Option<FolderId>, Vec<usize>>,
}

impl FolderIndex {
    /// Build the index from the full folder list.
    pub fn new(folders: Vec<Folder>) -> Self {
        let mut by_id = HashMap::with_capacity(folders.len());
        let mut children: HashMap<Option<FolderId>, Vec<usize>> = HashMap::new();

        for (pos, folder) in folders.iter().enumerate() {
            by_id.insert(folder.id, pos);
            children.entry(folder.parent_id).or_default().push(pos);
        }

        Self {
            folders,
            by_id,
            children,
        }
    }

    /// All folders in list order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Consume the index, returning the underlying list.
    pub fn into_folders(self) -> Vec<Folder> {
        self.folders
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Look up a folder by id.
    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.by_id.get(&id).map(|&pos| &self.folders[pos])
    }

    /// Whether the list contains `id`.
    pub fn contains(&self, id: FolderId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The first folder without a parent, if any.
    pub fn root(&self) -> Option<&Folder> {
        self.children(None).next()
    }

    /// Direct children of `parent` (`None` for top-level folders), in list order.
    pub fn children(&self, parent: Option<FolderId>) -> impl Iterator<Item = &Folder> + '_ {
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .map(|&pos| &self.folders[pos])
    }

    /// Whether any folder names `id` as its parent.
    pub fn has_children(&self, id: FolderId) -> bool {
        self.children
            .get(&Some(id))
            .is_some_and(|kids| !kids.is_empty())
    }

    /// Rows visible for the given expansion state.
    ///
    /// Depth-first from the top-level folders; a folder's subtree is only
    /// visited when that folder is expanded. A malformed list containing a
    /// parent cycle is walked at most once per folder.
    pub fn visible_rows(&self, expanded: &ExpandedSet) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        let mut stack: Vec<(usize, usize)> = self
            .child_positions(None)
            .iter()
            .rev()
            .map(|&pos| (pos, 0))
            .collect();

        while let Some((pos, depth)) = stack.pop() {
            let folder = &self.folders[pos];
            if !seen.insert(folder.id) {
                continue;
            }

            let has_children = self.has_children(folder.id);
            let is_expanded = expanded.is_expanded(folder.id);
            rows.push(TreeRow {
                folder,
                depth,
                has_children,
                is_expanded,
            });

            if is_expanded {
                stack.extend(
                    self.child_positions(Some(folder.id))
                        .iter()
                        .rev()
                        .map(|&child| (child, depth + 1)),
                );
            }
        }

        rows
    }

    /// Ids of every folder below `id`, not including `id` itself.
    pub fn descendants(&self, id: FolderId) -> Vec<FolderId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            for child in self.children(Some(current)) {
                if seen.insert(child.id) {
                    out.push(child.id);
                    stack.push(child.id);
                }
            }
        }

        out
    }

    fn child_positions(&self, parent: Option<FolderId>) -> &[usize] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }
}
