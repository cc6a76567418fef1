use side_diff::{Diff, DiffLine, HunkRange, RenderOptions, render, side_by_side};
use similar_asserts::assert_eq;

fn content_rows(rendered: &str) -> Vec<&str> {
    // Skip blank line, File:, rule, Old/New header, rule
    rendered.lines().skip(5).collect()
}

#[test]
fn pure_addition_keeps_context_aligned() {
    let rendered = side_by_side(
        "@@ -1,2 +1,3 @@\n context\n+added\n context",
        &RenderOptions::default(),
    );
    let rows = content_rows(&rendered);

    assert_eq!(rows.len(), 3);
    let (old, new) = rows[0].split_once(" │ ").unwrap();
    assert_eq!(old.trim(), "1   context");
    assert_eq!(new.trim(), "1   context");

    let (old, new) = rows[1].split_once(" │ ").unwrap();
    assert_eq!(old.trim(), "");
    assert_eq!(new.trim(), "2 + added");

    let (old, new) = rows[2].split_once(" │ ").unwrap();
    assert_eq!(old.trim(), "2   context");
    assert_eq!(new.trim(), "3   context");
}

#[test]
fn replacement_block_pairs_positionally() {
    let rendered = side_by_side(
        "@@ -1,2 +1 @@\n-old1\n-old2\n+new1",
        &RenderOptions::default(),
    );
    let rows = content_rows(&rendered);

    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("- old1"));
    assert!(rows[0].contains("+ new1"));
    assert!(rows[1].contains("- old2"));
    assert!(rows[1].ends_with('│'));
}

#[test]
fn missing_counts_default_to_one() {
    let diff = Diff::parse("@@ -5 +7 @@\n-a\n+b\n");
    let hunk = &diff.files[0].hunks[0];

    assert_eq!(hunk.old, HunkRange { start: 5, count: 1 });
    assert_eq!(hunk.new, HunkRange { start: 7, count: 1 });
}

#[test]
fn malformed_file_marker_opens_no_scope() {
    let diff = Diff::parse("diff --git malformed\nindex 123..456\ndiff --git a/x.txt b/x.txt\n@@ -1 +1 @@\n-a\n+b\n");

    assert_eq!(diff.files.len(), 1);
    assert_eq!(diff.files[0].new_path, "x.txt");
}

#[test]
fn multiple_files_render_in_order() {
    let text = r#"diff --git a/src/main.rs b/src/main.rs
index 83db48f..bf269f4 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,3 @@
 fn main() {
-    println!("hello");
+    println!("hello, world");
 }
diff --git a/README.md b/README.md
index 1111111..2222222 100644
--- a/README.md
+++ b/README.md
@@ -1 +1,2 @@
 # demo
+Prints a greeting.
"#;
    let diff = Diff::parse(text);
    assert_eq!(diff.files.len(), 2);
    assert_eq!(diff.files[0].new_path, "src/main.rs");
    assert_eq!(diff.files[1].new_path, "README.md");

    let rendered = render::format(&diff, &RenderOptions::default());
    let main_at = rendered.find("File: src/main.rs").unwrap();
    let readme_at = rendered.find("File: README.md").unwrap();
    assert!(main_at < readme_at);
    assert!(rendered.starts_with("\nFile: src/main.rs\n"));
    assert!(rendered.contains("\n\nFile: README.md\n"));
}

#[test]
fn line_numbers_match_declared_ranges() {
    let text = r#"diff --git a/lib.rs b/lib.rs
--- a/lib.rs
+++ b/lib.rs
@@ -40,5 +40,4 @@ impl Parser {
     fn next(&mut self) {
-        self.pos += 1;
-        self.col += 1;
+        self.advance();
     }

\ No newline at end of file
"#;
    let diff = Diff::parse(text);
    let hunk = &diff.files[0].hunks[0];

    let last_old = hunk.lines.iter().filter_map(DiffLine::old_line).last();
    let last_new = hunk.lines.iter().filter_map(DiffLine::new_line).last();
    assert_eq!(last_old, Some(hunk.old.start + hunk.old.count - 1));
    assert_eq!(last_new, Some(hunk.new.start + hunk.new.count - 1));
}

#[test]
fn long_lines_are_truncated_to_content_width() {
    let options = RenderOptions {
        total_width: 20,
        show_line_numbers: false,
    };
    let long = "x".repeat(50);
    let rendered = side_by_side(&format!("@@ -1 +1 @@\n-{long}\n+short\n"), &options);
    let row = content_rows(&rendered)[0];
    let (old, new) = row.split_once(" │ ").unwrap();

    // marker + content_width (20 - 0 - 2 - 1)
    assert_eq!(old.chars().count(), 2 + 17);
    assert!(old.ends_with('…'));
    assert_eq!(old.chars().filter(|c| *c == 'x').count(), 16);
    assert_eq!(new, "+ short");
}

#[test]
fn hiding_line_numbers_removes_gutter() {
    let options = RenderOptions {
        total_width: 30,
        show_line_numbers: false,
    };
    let rendered = side_by_side("@@ -8 +8 @@\n-before\n+after\n", &options);
    let row = content_rows(&rendered)[0];

    assert!(row.starts_with("- before"));
    assert!(!row.contains('8'));
}
