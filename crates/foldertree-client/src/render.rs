//! Plain-text rendering of a [`FolderView`].

use foldertree_entity::folder::TreeRow;

use crate::view::{FolderView, LoadState};

const INDENT: &str = "  ";

/// Render the visible rows, one folder per line.
///
/// Folders with children get `▸` when collapsed and `▾` when expanded;
/// leaves get blank padding in that column so names line up.
pub fn render_tree(view: &FolderView) -> String {
    match view.state() {
        LoadState::Loading => return "Loading folders...\n".to_string(),
        LoadState::Failed(message) => return format!("Failed to load folders: {message}\n"),
        LoadState::Ready => {}
    }

    let rows = view.rows();
    if rows.is_empty() {
        return "No folders.\n".to_string();
    }

    let mut out = String::new();
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Render a single row without a trailing newline.
pub fn render_row(row: &TreeRow<'_>) -> String {
    let arrow = match (row.has_children, row.is_expanded) {
        (false, _) => ' ',
        (true, false) => '▸',
        (true, true) => '▾',
    };
    let icon = if row.is_expanded { "📂" } else { "📁" };
    format!("{}{arrow} {icon} {}", INDENT.repeat(row.depth), row.folder.name)
}
