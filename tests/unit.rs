use std::fs;
use std::path::Path;
use tempfile::tempdir;
use treecat::{
    CombineBuilder, CombinedDocument, Level, MemoryReporter, ReadError, Reporter,
    TraversalEntry, WriteError, read_text, should_include,
};

fn file_entry(relative: &str) -> TraversalEntry {
    let root = Path::new("/project");
    TraversalEntry::with_kind(root, &root.join(relative), true)
}

#[test]
fn test_entry_label_is_relative_with_forward_slashes() {
    let entry = file_entry("src/core/lib.rs");
    assert_eq!(entry.label(), "src/core/lib.rs");
    assert_eq!(entry.file_name, "lib.rs");
    assert_eq!(entry.extension.as_deref(), Some("rs"));
}

#[test]
fn test_filter_includes_plain_text_file() {
    assert!(should_include(&file_entry("src/main.rs"), "combined_project.txt"));
}

#[test]
fn test_filter_excludes_directories() {
    let root = Path::new("/project");
    let entry = TraversalEntry::with_kind(root, &root.join("src"), false);
    assert!(!should_include(&entry, "combined_project.txt"));
}

#[test]
fn test_filter_excludes_output_file_name() {
    assert!(!should_include(&file_entry("combined_project.txt"), "combined_project.txt"));
    assert!(!should_include(&file_entry("nested/out.txt"), "out.txt"));
}

#[test]
fn test_filter_excludes_hidden_files() {
    assert!(!should_include(&file_entry(".env"), "out.txt"));
    assert!(!should_include(&file_entry("deep/dir/.hidden.txt"), "out.txt"));
}

#[test]
fn test_filter_matches_denylisted_dirs_by_whole_component() {
    assert!(!should_include(&file_entry(".git/config"), "out.txt"));
    assert!(!should_include(&file_entry("web/node_modules/pkg/index.js"), "out.txt"));
    assert!(should_include(&file_entry("mygit/config"), "out.txt"));
    assert!(should_include(&file_entry("my_node_modules_thing/index.js"), "out.txt"));
}

#[test]
fn test_filter_excludes_denylisted_extensions() {
    assert!(!should_include(&file_entry("image.png"), "out.txt"));
    assert!(!should_include(&file_entry("docs/manual.PDF"), "out.txt"));
    assert!(should_include(&file_entry("png.txt"), "out.txt"));
}

#[test]
fn test_output_file_name_uses_last_component() {
    let options = CombineBuilder::new(".").output("out/all.txt").build();
    assert_eq!(options.output_file_name(), "all.txt");
}

#[test]
fn test_read_text_preserves_content_exactly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(&path, "one\r\ntwo\n\n").unwrap();
    assert_eq!(read_text(&path).unwrap(), "one\r\ntwo\n\n");
}

#[test]
fn test_read_text_rejects_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.dat");
    fs::write(&path, vec![0x80, 0x81, 0x00, 0xff]).unwrap();
    match read_text(&path) {
        Err(ReadError::NotText { binary, .. }) => assert!(binary),
        other => panic!("expected NotText, got {:?}", other),
    }
}

#[test]
fn test_read_text_missing_file_is_io_failure() {
    let dir = tempdir().unwrap();
    let result = read_text(&dir.path().join("gone.txt"));
    assert!(matches!(result, Err(ReadError::Io { .. })));
}

#[test]
fn test_document_renders_sections_in_order() {
    let mut doc = CombinedDocument::new();
    doc.append("a.txt", "hello");
    doc.append("src/b.rs", "fn b() {}\n");
    let rule = "=".repeat(50);
    let expected = format!(
        "\n\n{rule}\nFILE: a.txt\n{rule}\n\nhello\n\n{rule}\nFILE: src/b.rs\n{rule}\n\nfn b() {{}}\n"
    );
    assert_eq!(doc.render(), expected);
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_finalize_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "stale content that is longer than the new one").unwrap();
    let mut doc = CombinedDocument::new();
    doc.append("a.txt", "x");
    doc.finalize(&out).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), doc.render());
}

#[test]
fn test_finalize_empty_document_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "previous").unwrap();
    let doc = CombinedDocument::new();
    assert!(matches!(doc.finalize(&out), Err(WriteError::NoContent)));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn test_finalize_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("missing_dir").join("out.txt");
    let mut doc = CombinedDocument::new();
    doc.append("a.txt", "x");
    assert!(matches!(doc.finalize(&out), Err(WriteError::Io { .. })));
}

#[test]
fn test_level_styles_have_distinct_tags() {
    assert_eq!(Level::Info.style().tag, "[INFO]");
    assert_eq!(Level::Success.style().tag, "[SUCCESS]");
    assert_eq!(Level::Warning.style().tag, "[WARNING]");
    assert_eq!(Level::Error.style().tag, "[ERROR]");
}

#[test]
fn test_every_level_has_its_own_tag_and_color() {
    for (i, a) in Level::ALL.iter().enumerate() {
        for b in &Level::ALL[i + 1..] {
            assert_ne!(a.style().tag, b.style().tag);
            assert_ne!(a.style().color, b.style().color);
        }
    }
}

#[test]
fn test_memory_reporter_records_levels() {
    let mut reporter = MemoryReporter::new();
    reporter.info("a");
    reporter.warning("b");
    reporter.warning("c");
    assert_eq!(reporter.count(Level::Warning), 2);
    assert_eq!(reporter.messages[0], (Level::Info, "a".to_string()));
}
