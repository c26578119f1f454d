use notebook_cli::Shell;
use notebook_core::{InMemoryNoteRepository, NoteId, NoteRepository, NoteService};
use std::io::Cursor;

fn run_session(script: &str) -> (String, Shell<InMemoryNoteRepository>) {
    let mut shell = Shell::new(NoteService::new(InMemoryNoteRepository::new()));
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    shell.run(&mut input, &mut output).unwrap();
    (String::from_utf8(output).unwrap(), shell)
}

#[test]
fn add_then_list_renders_summary_lines() {
    let (out, shell) =
        run_session("add\nGroceries\nmilk, eggs\nadd\nWork\nfinish report\nlist\nquit\n");

    assert!(out.contains("Added note 1."));
    assert!(out.contains("Added note 2."));
    assert!(out.contains("Note 1: Groceries (Created: "));
    assert!(out.contains("Note 2: Work (Created: "));
    assert!(out.trim_end().ends_with("Bye."));
    assert_eq!(shell.service().repository().len(), 2);
}

#[test]
fn add_with_empty_content_reports_validation_error() {
    let (out, shell) = run_session("add\nTitle only\n\n");

    assert!(out.contains("Error: note content cannot be empty"));
    assert!(shell.service().repository().is_empty());
}

#[test]
fn edit_rejects_malformed_and_unknown_ids() {
    let (out, _) = run_session("edit abc\nedit 9\n");
    assert_eq!(out.matches("Error: Invalid note ID.").count(), 2);
}

#[test]
fn edit_with_blank_input_keeps_current_values() {
    let (out, shell) = run_session("add\nWork\nfinish report\nedit 1\n\nreport sent\n");

    assert!(out.contains("Current title: Work"));
    assert!(out.contains("Updated note 1."));
    let note = shell
        .service()
        .repository()
        .get_note(NoteId::FIRST)
        .unwrap();
    assert_eq!(note.title, "Work");
    assert_eq!(note.content, "report sent");
}

#[test]
fn delete_prompts_for_id_and_reports_missing_notes() {
    let (out, shell) = run_session("add\nA\nB\ndelete\n1\ndelete 1\ndelete one\n");

    assert!(out.contains("Enter note ID to delete: "));
    assert!(out.contains("Deleted note 1."));
    assert!(out.contains("No notes."));
    assert!(out.contains("Error: Note ID does not exist."));
    assert!(out.contains("Error: Invalid note ID."));
    assert_eq!(shell.service().repository().next_id(), NoteId::new(2).unwrap());
}

#[test]
fn active_search_is_rerun_after_mutations_until_list() {
    let script = "\
add\nShopping List\nbuy milk\n\
add\nWork\nfinish report\n\
search shopping milk\n\
add\nMilk run\nshopping again\n\
list\n";
    let (out, _) = run_session(script);

    let start = out.find("Added note 3.").unwrap();
    let end = start + out[start..].find("notebook> ").unwrap();
    let after_search = &out[start..end];
    assert!(after_search.contains("Note 1: Shopping List"));
    assert!(after_search.contains("Note 3: Milk run"));
    assert!(!after_search.contains("Note 2: Work"));

    let last_listing = &out[out.rfind("Note 1:").unwrap()..];
    assert!(last_listing.contains("Note 2: Work"));
}

#[test]
fn unknown_commands_and_help_do_not_stop_the_shell() {
    let (out, _) = run_session("fly\nhelp\n\nlist\n");

    assert!(out.contains("Unknown command `fly`."));
    assert!(out.contains("Commands:"));
    assert!(out.contains("No notes."));
    assert!(out.trim_end().ends_with("Bye."));
}

#[test]
fn show_prints_summary_then_content_and_reports_unknown_ids() {
    let (out, _) = run_session("add\nA\nbody\nshow 1\nshow 9\n");
    let lines = out.lines().collect::<Vec<_>>();

    let at = lines
        .iter()
        .position(|line| line.starts_with("notebook> Note 1: A (Created: "))
        .unwrap();
    assert!(lines[at].ends_with(')'));
    assert!(lines[at].contains(", Last Modified: "));
    assert_eq!(lines[at + 1], "body");
    assert_eq!(lines[at + 2], "notebook> Error: Note ID does not exist.");
}

#[test]
fn edit_without_id_prompts_for_one() {
    let (out, shell) = run_session("add\nA\nbody\nedit\n1\n\nnew\n");

    assert!(out.contains("notebook> Enter note ID to edit: Current title: A\n"));
    assert!(out.contains("Current content: body\n"));
    assert!(out.contains("Updated note 1."));
    let note = shell
        .service()
        .repository()
        .get_note(NoteId::FIRST)
        .unwrap();
    assert_eq!(note.title, "A");
    assert_eq!(note.content, "new");
}

#[test]
fn search_stays_active_until_list() {
    let (_, shell) = run_session("search shopping milk\n");
    assert_eq!(shell.active_search(), Some("shopping milk"));

    let (_, shell) = run_session("search shopping milk\nadd\nA\nB\nlist\n");
    assert_eq!(shell.active_search(), None);
}
