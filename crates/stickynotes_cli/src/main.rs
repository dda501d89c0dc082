//! Terminal binding for the sticky-notes core.
//!
//! # Responsibility
//! - Drive `NoteStore` from a line-oriented REPL.
//! - Render notes as cards (color tag, timestamp, text).
//!
//! A bare text line is the add input; commands start with `:`.
//! `:edit <id>` prompts for replacement text on the next line, where an
//! empty line cancels the edit, mirroring the Enter-commits /
//! Escape-cancels contract of the original widget.

use std::io::{self, BufRead, Write};
use stickynotes_core::{
    default_log_level, init_logging, JsonFileStorage, Note, NoteId, NoteStore,
};

fn notes_file_path() -> std::path::PathBuf {
    if let Ok(path) = std::env::var("STICKYNOTES_FILE") {
        return path.into();
    }
    dirs::data_dir()
        .unwrap_or_else(|| ".".into())
        .join("stickynotes")
        .join("notes.json")
}

fn main() {
    let notes_path = notes_file_path();
    if let Some(dir) = notes_path.parent() {
        if let Err(err) = init_logging(default_log_level(), dir.join("logs")) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut store = NoteStore::open(JsonFileStorage::new(&notes_path));
    println!("sticky notes ({} loaded from {})", store.len(), notes_path.display());
    println!("type a note and press Enter; :ls :edit <id> :rm <id> :quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::List => render_cards(store.notes()),
            Command::Add(text) => {
                store.set_input(text);
                match store.submit_input() {
                    Some(id) => println!("added note {id}"),
                    None => println!("empty note ignored"),
                }
            }
            Command::Remove(id) => {
                if store.delete(id) {
                    println!("deleted note {id}");
                } else {
                    println!("no note with id {id}");
                }
            }
            Command::Edit(id) => edit_note(&mut store, id, &mut lines),
            Command::Unknown(cmd) => println!("unknown command `{cmd}`"),
        }
    }

    println!("bye ({} notes kept)", store.len());
}

enum Command {
    Add(String),
    List,
    Edit(NoteId),
    Remove(NoteId),
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Add(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("ls"), _) => Command::List,
        (Some("quit"), _) | (Some("q"), _) => Command::Quit,
        (Some("rm"), Some(id)) => match id.parse() {
            Ok(id) => Command::Remove(id),
            Err(_) => Command::Unknown(rest.to_string()),
        },
        (Some("edit"), Some(id)) => match id.parse() {
            Ok(id) => Command::Edit(id),
            Err(_) => Command::Unknown(rest.to_string()),
        },
        _ => Command::Unknown(rest.to_string()),
    }
}

fn edit_note<S, L>(store: &mut NoteStore<S>, id: NoteId, lines: &mut L)
where
    S: stickynotes_core::NoteStorage,
    L: Iterator<Item = io::Result<String>>,
{
    let Some(current) = store.notes().iter().find(|note| note.id == id) else {
        println!("no note with id {id}");
        return;
    };
    let current_text = current.text.clone();

    store.start_edit(id, current_text.as_str());
    println!("editing {id}: {current_text}");
    print!("new text (empty line cancels)> ");
    let _ = io::stdout().flush();

    match lines.next() {
        Some(Ok(replacement)) if !replacement.trim().is_empty() => {
            store.set_edit_text(replacement);
            store.save_edit();
            println!("saved");
        }
        _ => {
            store.cancel_edit();
            println!("edit cancelled");
        }
    }
}

fn render_cards(notes: &[Note]) {
    if notes.is_empty() {
        println!("no notes yet");
        return;
    }
    for note in notes {
        println!(
            "[{:>7}] {}  ({}, id {})",
            note.color.tag(),
            note.text,
            note.created_at,
            note.id
        );
    }
    let plural = if notes.len() == 1 { "" } else { "s" };
    println!("{} note{plural}", notes.len());
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};

    #[test]
    fn bare_text_is_an_add() {
        assert!(matches!(parse_command("Buy milk"), Command::Add(text) if text == "Buy milk"));
    }

    #[test]
    fn colon_commands_parse_with_ids() {
        assert!(matches!(parse_command(":ls"), Command::List));
        assert!(matches!(parse_command(":rm 17"), Command::Remove(17)));
        assert!(matches!(parse_command(":edit 17"), Command::Edit(17)));
        assert!(matches!(parse_command(":quit"), Command::Quit));
    }

    #[test]
    fn malformed_id_is_unknown() {
        assert!(matches!(parse_command(":rm abc"), Command::Unknown(_)));
    }
}
