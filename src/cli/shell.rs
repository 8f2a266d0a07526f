//! Line-oriented interactive session driving a [`NotesController`].
//!
//! Stdin commands and controller events are multiplexed on one task, so the
//! controller is only ever touched from here.

use nh_app::{ControllerEvent, NotesController};
use nh_core::{NewNote, NoteId, NoteTag};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::render::render_view;

const HELP: &str = "\
commands:
  search <text>      filter notes (empty clears)
  page <n>           go to page n
  new                open the create form
  title <text>       set the form title
  content <text>     set the form content
  tag <tag>          Todo | Work | Personal | Meeting | Shopping
  save               submit the form
  cancel             close the form and discard it
  delete <id>        delete a note
  show               redraw
  help               this text
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Page(u32),
    New,
    Title(String),
    Content(String),
    Tag(NoteTag),
    Save,
    Cancel,
    Delete(NoteId),
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" | "show" => Ok(Self::Show),
            "search" => Ok(Self::Search(rest.to_string())),
            "page" => rest
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .map(Self::Page)
                .ok_or_else(|| format!("not a page number: {:?}", rest)),
            "new" => Ok(Self::New),
            "title" => Ok(Self::Title(rest.to_string())),
            "content" => Ok(Self::Content(rest.to_string())),
            "tag" => rest.parse().map(Self::Tag).map_err(|e| format!("{}", e)),
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "delete" if !rest.is_empty() => Ok(Self::Delete(NoteId::from(rest))),
            "delete" => Err("delete needs a note id".to_string()),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command: {} (try 'help')", other)),
        }
    }
}

enum Input {
    Line(Option<String>),
    Event(ControllerEvent),
}

/// Run until `quit` or end of input.
pub async fn run_shell(mut controller: NotesController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    controller.sync().await;
    print!("{}", render_view(&controller.view().await));

    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            event = controller.next_event() => Input::Event(event),
        };

        match input {
            Input::Line(None) => break,
            Input::Line(Some(line)) => match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(ShellCommand::Help) => println!("{}", HELP),
                Ok(command) => {
                    apply(&mut controller, command).await;
                    print!("{}", render_view(&controller.view().await));
                }
                Err(message) => eprintln!("{}", message),
            },
            Input::Event(ControllerEvent::FetchSettled { is_active: false, key }) => {
                debug!(key = %key, "ignoring superseded fetch");
            }
            Input::Event(_) => print!("{}", render_view(&controller.view().await)),
        }
    }

    Ok(())
}

async fn apply(controller: &mut NotesController, command: ShellCommand) {
    match command {
        ShellCommand::Search(text) => controller.set_search(text).await,
        ShellCommand::Page(page) => controller.set_page(page).await,
        ShellCommand::New => controller.open_modal(),
        ShellCommand::Title(title) => edit_draft(controller, |d| d.title = title),
        ShellCommand::Content(content) => edit_draft(controller, |d| d.content = content),
        ShellCommand::Tag(tag) => edit_draft(controller, |d| d.tag = tag),
        ShellCommand::Save => {
            if !controller.state().is_modal_open() {
                eprintln!("no open form; use 'new' first");
            } else if let Ok(note) = controller.submit_draft().await {
                println!("created {}", note.id);
            }
        }
        ShellCommand::Cancel => controller.close_modal(),
        ShellCommand::Delete(id) => match controller.delete_note(&id).await {
            Ok(response) => println!("{}", response.message),
            Err(err) => eprintln!("delete failed: {}", err),
        },
        ShellCommand::Show => {
            controller.sync().await;
        }
        ShellCommand::Help | ShellCommand::Quit => {}
    }
}

fn edit_draft(controller: &mut NotesController, edit: impl FnOnce(&mut NewNote)) {
    if !controller.state().is_modal_open() {
        eprintln!("no open form; use 'new' first");
        return;
    }
    let mut draft = controller.state().draft().clone();
    edit(&mut draft);
    controller.update_draft(draft);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_spaces_and_empty_search() {
        assert_eq!(
            ShellCommand::parse("search weekly  sync"),
            Ok(ShellCommand::Search("weekly  sync".to_string()))
        );
        assert_eq!(ShellCommand::parse("search"), Ok(ShellCommand::Search(String::new())));
    }

    #[test]
    fn page_must_be_positive_number() {
        assert_eq!(ShellCommand::parse("page 3"), Ok(ShellCommand::Page(3)));
        assert!(ShellCommand::parse("page 0").is_err());
        assert!(ShellCommand::parse("page two").is_err());
    }

    #[test]
    fn parses_form_commands() {
        assert_eq!(ShellCommand::parse("tag work"), Ok(ShellCommand::Tag(NoteTag::Work)));
        assert!(ShellCommand::parse("tag urgent").is_err());
        assert_eq!(
            ShellCommand::parse("title Buy milk"),
            Ok(ShellCommand::Title("Buy milk".to_string()))
        );
    }

    #[test]
    fn delete_requires_id() {
        assert_eq!(
            ShellCommand::parse("delete 42"),
            Ok(ShellCommand::Delete(NoteId::from(42)))
        );
        assert!(ShellCommand::parse("delete").is_err());
    }

    #[test]
    fn blank_line_redraws_and_unknown_is_rejected() {
        assert_eq!(ShellCommand::parse("   "), Ok(ShellCommand::Show));
        assert!(ShellCommand::parse("frobnicate").is_err());
    }
}
