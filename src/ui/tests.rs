use super::*;
use crate::app::{Model, Notice, NoticeLevel};
use crate::list::ItemList;
use std::path::PathBuf;

fn rendered(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_list_is_numbered_from_one() {
    let items: ItemList = ["milk", "eggs", "bread"].into_iter().collect();
    let text = rendered(|out| render_list(out, &items));
    assert_eq!(text, "\nCurrent List:\n1: milk\n2: eggs\n3: bread\n");
}

#[test]
fn test_list_numbers_are_right_aligned() {
    let items: ItemList = (1..=10).map(|i| format!("item {i}")).collect();
    let text = rendered(|out| render_list(out, &items));
    assert!(text.contains("\n 1: item 1\n"));
    assert!(text.contains("\n10: item 10\n"));
}

#[test]
fn test_empty_list_is_marked() {
    let text = rendered(|out| render_list(out, &ItemList::new()));
    assert_eq!(text, "\nCurrent List:\n  (empty)\n");
}

#[test]
fn test_menu_lists_commands_in_order() {
    let text = rendered(render_menu);
    let letters: Vec<char> = text
        .lines()
        .filter_map(|line| line.split_once(" - ").map(|(letter, _)| letter))
        .filter_map(|letter| letter.chars().next())
        .collect();
    assert_eq!(letters, vec!['A', 'D', 'I', 'M', 'O', 'S', 'C', 'V', 'Q']);
    assert!(text.contains("Q - Quit the program"));
}

#[test]
fn test_notice_is_written_as_a_line() {
    let notice = Notice {
        level: NoticeLevel::Error,
        text: "Error loading file: nope".to_string(),
    };
    let text = rendered(|out| render_notice(out, &notice));
    assert_eq!(text, "Error loading file: nope\n");
}

#[test]
fn test_status_line_for_new_session() {
    let model = Model::new();
    assert_eq!(status_line(&model), "[untitled] 0 items");
}

#[test]
fn test_status_line_shows_file_and_unsaved_marker() {
    let mut model = Model::with_items(["one"]);
    model.current_file = Some(PathBuf::from("todo.txt"));
    model.dirty = true;
    assert_eq!(status_line(&model), "[todo.txt] 1 item, unsaved changes");

    let text = rendered(|out| render_status(out, &model));
    assert_eq!(text, "[todo.txt] 1 item, unsaved changes\n");
}
