use notebook_core::{InMemoryNoteRepository, NoteId, NoteRepository, SearchQuery};

fn seeded_repo() -> InMemoryNoteRepository {
    let mut repo = InMemoryNoteRepository::new();
    repo.add_note("Shopping List", "buy milk").unwrap();
    repo.add_note("Work", "finish REPORT by friday").unwrap();
    repo.add_note("Reading", "Rust book chapter 4").unwrap();
    repo
}

fn hit_ids(repo: &InMemoryNoteRepository, text: &str) -> Vec<u64> {
    repo.search_notes(&SearchQuery::parse(text))
        .keys()
        .map(|id| id.get())
        .collect()
}

#[test]
fn blank_query_returns_every_note() {
    let repo = seeded_repo();
    assert_eq!(hit_ids(&repo, ""), [1, 2, 3]);
    assert_eq!(hit_ids(&repo, "   \t"), [1, 2, 3]);
}

#[test]
fn unmatched_query_returns_empty_map() {
    let repo = seeded_repo();
    assert!(hit_ids(&repo, "zzz_no_match").is_empty());
}

#[test]
fn search_is_case_insensitive_in_both_directions() {
    let repo = seeded_repo();
    assert_eq!(hit_ids(&repo, "report"), [2]);
    assert_eq!(hit_ids(&repo, "RUST"), [3]);
}

#[test]
fn each_term_may_match_title_or_content() {
    let repo = seeded_repo();
    assert_eq!(hit_ids(&repo, "shopping milk"), [1]);
    assert!(hit_ids(&repo, "shopping eggs").is_empty());
}

#[test]
fn terms_match_as_substrings() {
    let repo = seeded_repo();
    assert_eq!(hit_ids(&repo, "read"), [3]);
    assert_eq!(hit_ids(&repo, "i"), [1, 2, 3]);
}

#[test]
fn search_reflects_edits_and_deletes() {
    let mut repo = seeded_repo();
    let work = NoteId::new(2).unwrap();

    repo.edit_note(work, "Work", "submit invoice").unwrap();
    assert!(hit_ids(&repo, "report").is_empty());
    assert_eq!(hit_ids(&repo, "invoice"), [2]);

    repo.delete_note(work).unwrap();
    assert!(hit_ids(&repo, "invoice").is_empty());
}

#[test]
fn search_on_empty_repository_is_empty() {
    let repo = InMemoryNoteRepository::new();
    assert!(hit_ids(&repo, "").is_empty());
}
