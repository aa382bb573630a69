use pommel::{transform, PomDocument, Transformation};

use rstest::rstest;

#[rstest]
#[case::four_spaces(
    "<project>\n    <modelVersion>4.0.0</modelVersion>\n</project>\n",
    "    ",
    "\n"
)]
#[case::two_spaces_crlf(
    "<project>\r\n  <modelVersion>4.0.0</modelVersion>\r\n</project>\r\n",
    "  ",
    "\r\n"
)]
#[case::tab(
    "<project>\n\t<modelVersion>4.0.0</modelVersion>\n</project>\n",
    "\t",
    "\n"
)]
#[case::comment_carries_indentation(
    "<project>\n  <!-- c -->\n  <modelVersion>4.0.0</modelVersion>\n</project>\n",
    "  ",
    "\n"
)]
#[case::unindented_falls_back("<project><modelVersion>4.0.0</modelVersion></project>", "    ", "\n")]
#[case::empty_document_falls_back("<project/>", "    ", "\n")]
fn detects_style(#[case] xml: &str, #[case] indent: &str, #[case] eol: &str) {
    let doc = PomDocument::parse(xml).unwrap();
    assert_eq!(doc.style().indent(), indent);
    assert_eq!(doc.style().eol(), eol);
}

#[test]
fn insertions_follow_the_detected_style() {
    let source = "<project>\r\n  <modelVersion>4.0.0</modelVersion>\r\n</project>\r\n";
    let expected = "<project>\r\n  <modelVersion>4.0.0</modelVersion>\r\n\r\n  <properties>\r\n    <acme.version>1.0.0</acme.version>\r\n  </properties>\r\n</project>\r\n";
    let mut result = String::new();
    transform(
        &[Transformation::add_or_set_property("acme.version", "1.0.0")],
        "pom.xml",
        || source.to_string(),
        |out| result = out,
    )
    .unwrap();
    assert_eq!(result, expected);
}

#[test]
fn first_detected_unit_wins_in_mixed_documents() {
    let source = "<project>\n  <build>\n        <plugins/>\n  </build>\n</project>\n";
    let doc = PomDocument::parse(source).unwrap();
    assert_eq!(doc.style().indent(), "  ");
}
