//! Command-line surface: one-shot commands over the use cases and an
//! interactive shell over the controller.

mod render;
mod shell;

pub use render::{render_page, render_view};
pub use shell::{run_shell, ShellCommand};

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nh_core::{NewNote, NoteId, NoteTag};

use crate::bootstrap::AppDeps;

#[derive(Debug, Parser)]
#[command(name = "notehub", version, about = "Search, create and delete NoteHub notes")]
pub struct Cli {
    /// Optional TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of notes
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value_t = NoteTag::Todo)]
        tag: NoteTag,
    },
    /// Delete a note by id
    Delete { id: String },
    /// Interactive search/paginate/edit session
    Shell,
}

pub async fn run(command: Command, deps: AppDeps) -> anyhow::Result<()> {
    match command {
        Command::List { page, search } => {
            let notes = deps
                .list_notes()
                .execute(page, &search)
                .await
                .context("Failed to list notes")?;
            print!("{}", render_page(&notes, page));
        }
        Command::Create {
            title,
            content,
            tag,
        } => {
            let note = deps
                .create_note()
                .execute(&NewNote::new(title, content, tag))
                .await
                .context("Failed to create note")?;
            println!("Created note {} ({})", note.id, note.tag);
        }
        Command::Delete { id } => {
            let response = deps
                .delete_note()
                .execute(&NoteId::from(id))
                .await
                .context("Failed to delete note")?;
            println!("{} ({})", response.message, response.deleted_note_id);
        }
        Command::Shell => run_shell(deps.notes_controller()).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_defaults() {
        let cli = Cli::try_parse_from(["notehub", "list"]).unwrap();
        match cli.command {
            Command::List { page, search } => {
                assert_eq!(page, 1);
                assert_eq!(search, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_create_with_tag() {
        let cli = Cli::try_parse_from([
            "notehub", "create", "--title", "Retro", "--tag", "meeting",
        ])
        .unwrap();
        match cli.command {
            Command::Create { title, tag, .. } => {
                assert_eq!(title, "Retro");
                assert_eq!(tag, NoteTag::Meeting);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        assert!(Cli::try_parse_from(["notehub", "create", "--title", "x", "--tag", "urgent"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["notehub", "shell", "--config", "/tmp/nh.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/nh.toml")));
    }
}
