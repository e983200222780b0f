use mindcare_export::docx::{generate_docx, plain_line};
use mindcare_export::styles::DocumentStyles;

#[test]
fn produces_a_zip_container() {
    let rendered = "# Title\n\nSome **bold** text\n- item\n---\n## Section\n";
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();

    // DOCX is a ZIP archive.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn handles_tables_and_unclosed_bold() {
    let rendered = "| A | B |\n|---|---|\n| 1 | 2 |\nafter the table **dangling\n| trailing | table |\n";
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn empty_input_is_still_a_document() {
    let bytes = generate_docx("", &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn plain_line_neutralizes_markup() {
    assert_eq!(plain_line("a\n# b\r\n| c |"), "a # b / c /");
    assert_eq!(plain_line("  ### heading"), "heading");
    assert_eq!(plain_line("- bullet"), "bullet");
    assert_eq!(plain_line("---"), "");
    assert_eq!(plain_line("**bold** text"), "bold text");
    assert_eq!(plain_line("Engineering"), "Engineering");
}
