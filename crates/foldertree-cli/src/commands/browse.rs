//! Interactive tree browser.
//!
//! Loads the tree once, then loops: pick a folder, then expand/collapse it,
//! add a child or delete it. Mutations are sent to the API and patched into
//! the local view without refetching.

use dialoguer::{Input, Select};

use foldertree_client::{FolderApiClient, FolderView, LoadState, render_row};
use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;
use foldertree_core::types::FolderId;

use super::{ApiArgs, api_client};
use crate::output;

/// What to do with the selected folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    AddChild,
    Delete,
    Back,
}

impl Action {
    fn label(self, expanded: bool) -> &'static str {
        match self {
            Self::Toggle if expanded => "Collapse",
            Self::Toggle => "Expand",
            Self::AddChild => "Add subfolder",
            Self::Delete => "Delete",
            Self::Back => "Back",
        }
    }
}

/// Run the browser until the user quits.
pub async fn execute(args: &ApiArgs, config: &AppConfig) -> Result<(), AppError> {
    let client = api_client(args, config)?;
    let mut view = FolderView::new();
    view.load(&client).await;

    if let LoadState::Failed(message) = view.state() {
        return Err(AppError::external_service(format!(
            "Failed to load folders: {message}"
        )));
    }

    loop {
        let rows: Vec<(FolderId, String, bool, bool)> = view
            .rows()
            .iter()
            .map(|r| (r.folder.id, render_row(r), r.has_children, r.is_expanded))
            .collect();

        if rows.is_empty() {
            println!("No folders.");
            return Ok(());
        }

        let mut items: Vec<String> = rows.iter().map(|(_, label, _, _)| label.clone()).collect();
        items.push("Quit".to_string());

        let picked = Select::new()
            .with_prompt("Select a folder")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(output::input_error)?;

        let Some((id, _, has_children, expanded)) = picked.and_then(|i| rows.get(i).cloned()) else {
            return Ok(());
        };

        let mut actions = Vec::new();
        if has_children {
            actions.push(Action::Toggle);
        }
        actions.extend([Action::AddChild, Action::Delete, Action::Back]);
        let labels: Vec<&str> = actions.iter().map(|a| a.label(expanded)).collect();

        let choice = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(output::input_error)?;

        match choice.and_then(|i| actions.get(i).copied()) {
            Some(Action::Toggle) => {
                view.toggle(id);
            }
            Some(Action::AddChild) => add_child(&client, &mut view, id).await?,
            Some(Action::Delete) => delete(&client, &mut view, id).await?,
            Some(Action::Back) | None => {}
        }
    }
}

async fn add_child(
    client: &FolderApiClient,
    view: &mut FolderView,
    parent: FolderId,
) -> Result<(), AppError> {
    let name: String = Input::new()
        .with_prompt("Folder name")
        .interact_text()
        .map_err(output::input_error)?;

    match client.create_folder(&name, Some(parent)).await {
        Ok(folder) => {
            output::print_success(&format!("Folder '{}' created", folder.name));
            view.apply_created(folder);
        }
        Err(e) => output::print_error(&e.message),
    }
    Ok(())
}

async fn delete(
    client: &FolderApiClient,
    view: &mut FolderView,
    id: FolderId,
) -> Result<(), AppError> {
    let name = view
        .index()
        .get(id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| id.to_string());

    if !output::confirm(&format!("Delete '{name}'?"))? {
        return Ok(());
    }

    match client.delete_folder(id).await {
        Ok(message) => {
            output::print_success(&message);
            view.apply_deleted(id);
        }
        Err(e) => output::print_error(&e.message),
    }
    Ok(())
}
