//! Interactive line-oriented notebook shell.
//!
//! # Responsibility
//! - Translate typed commands into `NoteService` calls.
//! - Re-render the current view after every successful mutation.
//! - Surface every failure as a one-line message without touching state.
//!
//! # Invariants
//! - The shell never reaches the repository except through the service.
//! - An active search (set by `search`, cleared by `list`) is re-run after
//!   mutations instead of the full listing.

use log::debug;
use notebook_core::{
    parse_note_id, render_listing, NoteId, NoteMap, NoteRepository, NoteService, NoteServiceError,
    SearchQuery,
};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "notebook> ";
const INVALID_ID_MESSAGE: &str = "Invalid note ID.";
const MISSING_ID_MESSAGE: &str = "Note ID does not exist.";

const HELP_TEXT: &str = "\
Commands:
  add                    create a note (prompts for title and content)
  edit [id]              edit a note; blank input keeps the current value
  delete|del|rm [id]     delete a note
  show [id]              print one note in full
  list|ls                list all notes and clear the active search
  search|find [query]    list notes matching every query term
  help|?                 show this help
  quit|exit              leave the notebook
";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(Option<String>),
    Delete(Option<String>),
    Show(Option<String>),
    List,
    Search(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Splits `line` into a verb and the remaining argument text.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };
        let argument = || (!rest.is_empty()).then(|| rest.to_string());

        match verb.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "add" => Self::Add,
            "edit" => Self::Edit(argument()),
            "delete" | "del" | "rm" => Self::Delete(argument()),
            "show" => Self::Show(argument()),
            "list" | "ls" => Self::List,
            "search" | "find" => Self::Search(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// REPL state: the injected service plus the active search, if any.
pub struct Shell<R: NoteRepository> {
    service: NoteService<R>,
    active_search: Option<SearchQuery>,
}

impl<R: NoteRepository> Shell<R> {
    pub fn new(service: NoteService<R>) -> Self {
        Self {
            service,
            active_search: None,
        }
    }

    pub fn service(&self) -> &NoteService<R> {
        &self.service
    }

    /// Text of the search that filters the current view, if any.
    pub fn active_search(&self) -> Option<&str> {
        self.active_search.as_ref().map(SearchQuery::text)
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    /// Returns only I/O errors from `input`/`output`; note failures are
    /// reported to the user and the loop continues.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> io::Result<()> {
        writeln!(
            output,
            "Notebook {}. Type `help` for commands.",
            notebook_core::core_version()
        )?;

        loop {
            let Some(line) = prompt(input, output, PROMPT)? else {
                break;
            };
            let command = Command::parse(&line);
            debug!("event=shell_command module=cli command={command:?}");
            if !self.execute(command, input, output)? {
                break;
            }
        }

        writeln!(output, "Bye.")?;
        Ok(())
    }

    /// Executes one command. Returns `false` when the shell should stop.
    pub fn execute<I: BufRead, O: Write>(
        &mut self,
        command: Command,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<bool> {
        match command {
            Command::Add => self.add(input, output)?,
            Command::Edit(arg) => self.edit(arg, input, output)?,
            Command::Delete(arg) => self.delete(arg, input, output)?,
            Command::Show(arg) => self.show(arg, input, output)?,
            Command::List => {
                self.active_search = None;
                self.render_current_view(output)?;
            }
            Command::Search(text) => {
                self.active_search = Some(SearchQuery::parse(text));
                self.render_current_view(output)?;
            }
            Command::Help => write!(output, "{HELP_TEXT}")?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Unknown(verb) => {
                writeln!(output, "Unknown command `{verb}`. Type `help` for commands.")?;
            }
        }
        Ok(true)
    }

    fn add<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> io::Result<()> {
        let Some(title) = prompt(input, output, "Title: ")? else {
            return Ok(());
        };
        let Some(content) = prompt(input, output, "Content: ")? else {
            return Ok(());
        };

        match self.service.add_note(&title, &content) {
            Ok(id) => {
                writeln!(output, "Added note {id}.")?;
                self.render_current_view(output)
            }
            Err(err) => report(output, &err),
        }
    }

    fn edit<I: BufRead, O: Write>(
        &mut self,
        arg: Option<String>,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<()> {
        let Some(id) = self.resolve_id(arg, "Enter note ID to edit: ", input, output)? else {
            return Ok(());
        };
        let current = match self.service.get_note(id) {
            Ok(note) => note,
            Err(_) => return writeln!(output, "Error: {INVALID_ID_MESSAGE}"),
        };

        writeln!(output, "Current title: {}", current.title)?;
        writeln!(output, "Current content: {}", current.content)?;
        let Some(title) = prompt(input, output, "Title (blank keeps current): ")? else {
            return Ok(());
        };
        let Some(content) = prompt(input, output, "Content (blank keeps current): ")? else {
            return Ok(());
        };
        let title = if title.is_empty() { current.title } else { title };
        let content = if content.is_empty() {
            current.content
        } else {
            content
        };

        match self.service.edit_note(id, &title, &content) {
            Ok(()) => {
                writeln!(output, "Updated note {id}.")?;
                self.render_current_view(output)
            }
            Err(err) => report(output, &err),
        }
    }

    fn delete<I: BufRead, O: Write>(
        &mut self,
        arg: Option<String>,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<()> {
        let Some(id) = self.resolve_id(arg, "Enter note ID to delete: ", input, output)? else {
            return Ok(());
        };

        match self.service.delete_note(id) {
            Ok(()) => {
                writeln!(output, "Deleted note {id}.")?;
                self.render_current_view(output)
            }
            Err(NoteServiceError::NotFound(_)) => writeln!(output, "Error: {MISSING_ID_MESSAGE}"),
            Err(err) => report(output, &err),
        }
    }

    fn show<I: BufRead, O: Write>(
        &mut self,
        arg: Option<String>,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<()> {
        let Some(id) = self.resolve_id(arg, "Enter note ID to show: ", input, output)? else {
            return Ok(());
        };

        match self.service.get_note(id) {
            Ok(note) => {
                let single = NoteMap::from([(note.id, note.clone())]);
                write!(output, "{}", render_listing(&single))?;
                writeln!(output, "{}", note.content)
            }
            Err(NoteServiceError::NotFound(_)) => writeln!(output, "Error: {MISSING_ID_MESSAGE}"),
            Err(err) => report(output, &err),
        }
    }

    /// Parses `arg`, prompting for it first when absent.
    ///
    /// Prints the invalid-id message and yields `None` on malformed input or EOF.
    fn resolve_id<I: BufRead, O: Write>(
        &self,
        arg: Option<String>,
        label: &str,
        input: &mut I,
        output: &mut O,
    ) -> io::Result<Option<NoteId>> {
        let text = match arg {
            Some(text) => text,
            None => match prompt(input, output, label)? {
                Some(text) => text,
                None => return Ok(None),
            },
        };

        match parse_note_id(&text) {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(output, "Error: {INVALID_ID_MESSAGE}")?;
                Ok(None)
            }
        }
    }

    fn current_view(&self) -> NoteMap {
        match &self.active_search {
            Some(query) => self.service.run_search(query),
            None => self.service.list_notes(),
        }
    }

    fn render_current_view<O: Write>(&self, output: &mut O) -> io::Result<()> {
        let notes = self.current_view();
        if notes.is_empty() {
            return writeln!(output, "No notes.");
        }
        write!(output, "{}", render_listing(&notes))
    }
}

fn report<O: Write>(output: &mut O, err: &NoteServiceError) -> io::Result<()> {
    writeln!(output, "Error: {err}")
}

/// Prints `label` and reads one line without its terminator. `None` on EOF.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn parse_splits_verb_and_argument() {
        assert_eq!(Command::parse("  EDIT   12 "), Command::Edit(Some("12".to_string())));
        assert_eq!(Command::parse("delete"), Command::Delete(None));
        assert_eq!(
            Command::parse("search shopping  milk"),
            Command::Search("shopping  milk".to_string())
        );
        assert_eq!(Command::parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn parse_handles_blank_and_unknown_input() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("launch"), Command::Unknown("launch".to_string()));
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn parse_accepts_listed_aliases() {
        assert_eq!(Command::parse("rm 3"), Command::Delete(Some("3".to_string())));
        assert_eq!(Command::parse("del"), Command::Delete(None));
        assert_eq!(Command::parse("ls"), Command::List);
        assert_eq!(Command::parse("find milk"), Command::Search("milk".to_string()));
        assert_eq!(Command::parse("?"), Command::Help);
    }

    #[test]
    fn help_text_names_every_alias() {
        for alias in ["del", "rm", "ls", "find", "?", "exit"] {
            assert!(super::HELP_TEXT.contains(alias), "missing `{alias}`");
        }
    }
}
