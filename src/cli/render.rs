//! Plain-text rendering of notes and of the controller view.

use std::fmt::Write;

use nh_app::{MutationStatus, NotesView};
use nh_core::{Note, NotesPage};

fn write_note(out: &mut String, note: &Note) {
    let _ = writeln!(out, "[{}] {} ({})", note.id, note.title, note.tag);
    if !note.content.is_empty() {
        let _ = writeln!(out, "    {}", note.content);
    }
}

pub fn render_page(page: &NotesPage, current_page: u32) -> String {
    let mut out = String::new();
    for note in &page.notes {
        write_note(&mut out, note);
    }
    if page.notes.is_empty() {
        out.push_str("No notes.\n");
    }
    let _ = writeln!(
        out,
        "-- page {}/{} · {} notes",
        current_page, page.total_pages, page.total_notes
    );
    out
}

pub fn render_view(view: &NotesView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "search: {:?}", view.search_input);

    if view.is_loading {
        out.push_str("Loading...\n");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {}", error);
    }

    for note in &view.notes {
        write_note(&mut out, note);
    }
    if view.is_placeholder {
        out.push_str("(refreshing)\n");
    }

    if let Some(p) = view.pagination {
        let _ = writeln!(out, "-- page {}/{} · {} notes", p.current_page, p.total_pages, view.total_notes);
    }

    if view.is_modal_open {
        let _ = writeln!(
            out,
            "[new note] title: {:?} content: {:?} tag: {}",
            view.draft.title, view.draft.content, view.draft.tag
        );
        if let MutationStatus::Failed(message) = &view.mutation {
            let _ = writeln!(out, "  not saved: {}", message);
        }
    }
    out
}
