//! Folder commands that talk to a running API server.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use foldertree_client::{FolderView, render_tree};
use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;
use foldertree_core::types::FolderId;
use foldertree_entity::folder::Folder;

use super::{ApiArgs, api_client};
use crate::output::{self, OutputFormat};

/// Arguments for `tree`
#[derive(Debug, Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Expand this folder (repeatable)
    #[arg(short, long = "expand", value_name = "ID")]
    pub expand: Vec<FolderId>,

    /// Expand every folder
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `add`
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Folder name
    #[arg(short, long)]
    pub name: String,

    /// Parent folder ID (omit to create the root)
    #[arg(short, long)]
    pub parent: Option<FolderId>,
}

/// Arguments for `delete`
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Folder ID
    pub id: FolderId,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    #[tabled(rename = "ID")]
    id: String,
    /// Name
    #[tabled(rename = "Name")]
    name: String,
    /// Parent ID
    #[tabled(rename = "Parent")]
    parent_id: String,
    /// Created at
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            parent_id: f.parent_id.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
            created_at: f.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// `tree`: fetch the list once and render it.
pub async fn tree(args: &TreeArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let client = api_client(&args.api, config)?;
    let folders = client.list_folders().await?;

    if format == OutputFormat::Json {
        output::print_json(&folders);
        return Ok(());
    }

    let mut view = FolderView::from_folders(folders);
    if args.all {
        view.expand_all();
    }
    for id in &args.expand {
        if !view.index().contains(*id) {
            output::print_warning(&format!("Unknown folder {id}, not expanded"));
        }
        view.expand(*id);
    }

    print!("{}", render_tree(&view));
    Ok(())
}

/// `list`: print the flat list.
pub async fn list(args: &ApiArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let client = api_client(args, config)?;
    let folders = client.list_folders().await?;

    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// `add`: create a folder.
pub async fn add(args: &AddArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let client = api_client(&args.api, config)?;
    let folder = client.create_folder(&args.name, args.parent).await?;

    match format {
        OutputFormat::Json => output::print_json(&folder),
        OutputFormat::Table => {
            output::print_success(&format!("Folder '{}' created", folder.name));
            output::print_kv("ID", &folder.id.to_string());
            if let Some(parent) = folder.parent_id {
                output::print_kv("Parent", &parent.to_string());
            }
        }
    }
    Ok(())
}

/// `delete`: delete a folder after confirmation.
pub async fn delete(args: &DeleteArgs, config: &AppConfig) -> Result<(), AppError> {
    if !args.yes && !output::confirm(&format!("Delete folder {}?", args.id))? {
        println!("Cancelled.");
        return Ok(());
    }

    let client = api_client(&args.api, config)?;
    let message = client.delete_folder(args.id).await?;
    output::print_success(&message);
    Ok(())
}
