//! Client-side view state for the folder tree.
//!
//! [`FolderView`] owns the flat list fetched from the API, the index derived
//! from it and the set of expanded nodes. The list is fetched once; later
//! mutations patch the local copy instead of refetching.

use tracing::{debug, warn};

use foldertree_core::types::FolderId;
use foldertree_entity::folder::{ExpandedSet, Folder, FolderIndex, TreeRow};

use crate::api::FolderApiClient;

/// Where the initial fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The list has not arrived yet.
    Loading,
    /// The list is available.
    Ready,
    /// The fetch failed. Stays this way until the next [`FolderView::load`].
    Failed(String),
}

/// Folder list plus expansion state.
#[derive(Debug, Clone)]
pub struct FolderView {
    index: FolderIndex,
    expanded: ExpandedSet,
    state: LoadState,
}

impl Default for FolderView {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderView {
    /// An empty view waiting for its first fetch.
    pub fn new() -> Self {
        Self {
            index: FolderIndex::default(),
            expanded: ExpandedSet::new(),
            state: LoadState::Loading,
        }
    }

    /// A ready view over an already fetched list, everything collapsed.
    pub fn from_folders(folders: Vec<Folder>) -> Self {
        Self {
            index: FolderIndex::new(folders),
            expanded: ExpandedSet::new(),
            state: LoadState::Ready,
        }
    }

    /// Fetch the list from the API, replacing the current one.
    ///
    /// A failure is recorded in [`FolderView::state`]; there are no retries.
    pub async fn load(&mut self, client: &FolderApiClient) {
        self.state = LoadState::Loading;
        match client.list_folders().await {
            Ok(folders) => {
                debug!(count = folders.len(), "Folders loaded");
                self.replace(folders);
                self.state = LoadState::Ready;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load folders");
                self.fail(e.message);
            }
        }
    }

    /// Mark the load as failed. The list is left as it was.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = LoadState::Failed(message.into());
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The derived parent → children index.
    pub fn index(&self) -> &FolderIndex {
        &self.index
    }

    /// The flat list in fetch order.
    pub fn folders(&self) -> &[Folder] {
        self.index.folders()
    }

    /// Ids currently expanded.
    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Rows to display for the current expansion state.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        self.index.visible_rows(&self.expanded)
    }

    /// Flip a node. Returns `true` if it is now expanded.
    pub fn toggle(&mut self, id: FolderId) -> bool {
        self.expanded.toggle(id)
    }

    /// Expand a single node.
    pub fn expand(&mut self, id: FolderId) {
        self.expanded.expand(id);
    }

    /// Expand every folder that has children.
    pub fn expand_all(&mut self) {
        let ids: Vec<FolderId> = self
            .index
            .folders()
            .iter()
            .filter(|f| self.index.has_children(f.id))
            .map(|f| f.id)
            .collect();
        for id in ids {
            self.expanded.expand(id);
        }
    }

    /// Record a folder the server just created.
    ///
    /// The folder is appended to the list and its parent is expanded so the
    /// new entry is visible.
    pub fn apply_created(&mut self, folder: Folder) {
        let parent = folder.parent_id;
        let mut folders = std::mem::take(&mut self.index).into_folders();
        folders.push(folder);
        self.index = FolderIndex::new(folders);

        if let Some(parent) = parent {
            self.expanded.expand(parent);
        }
    }

    /// Record a folder the server just deleted.
    ///
    /// Anything the local list still holds below it goes too, so a stale
    /// view never keeps orphans.
    pub fn apply_deleted(&mut self, id: FolderId) {
        let mut gone = self.index.descendants(id);
        gone.push(id);

        let mut folders = std::mem::take(&mut self.index).into_folders();
        folders.retain(|f| !gone.contains(&f.id));
        self.index = FolderIndex::new(folders);
        for id in gone {
            self.expanded.collapse(id);
        }
    }

    fn replace(&mut self, folders: Vec<Folder>) {
        self.index = FolderIndex::new(folders);
        let index = &self.index;
        self.expanded.retain(|id| index.contains(id));
    }
}
