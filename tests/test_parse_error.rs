use pommel::{transform, Error, PomDocument, Transformation};

#[test]
fn mismatched_close_tag() {
    let err = PomDocument::parse("<project><modules></project>").unwrap_err();
    match err {
        Error::MismatchedCloseTag { expected, found } => {
            assert_eq!(expected, "modules");
            assert_eq!(found, "project");
        }
        _ => panic!("unexpected error: {}", err),
    }
}

#[test]
fn unclosed_element() {
    let err = PomDocument::parse("<project><modules>").unwrap_err();
    match err {
        Error::UnclosedElement(name) => assert_eq!(name, "modules"),
        _ => panic!("unexpected error: {}", err),
    }
}

#[test]
fn two_document_elements() {
    // the tokenizer itself refuses a second document element
    let err = PomDocument::parse("<project/>\n<other/>").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn no_document_element() {
    let err = PomDocument::parse("<!-- nothing here -->\n").unwrap_err();
    assert!(matches!(err, Error::NoDocumentElement));
}

#[test]
fn text_outside_the_document_element() {
    let err = PomDocument::parse("stray<project/>").unwrap_err();
    assert!(matches!(err, Error::Structural(_) | Error::Parse(_)));
}

#[test]
fn dtd_is_rejected() {
    let err = PomDocument::parse("<!DOCTYPE project>\n<project/>").unwrap_err();
    assert!(matches!(err, Error::Unsupported("DTD")));
}

#[test]
fn transform_errors_name_the_document() {
    let err = transform(
        &[Transformation::add_module("acme-core")],
        "acme-parent/pom.xml",
        || "<project>".to_string(),
        |_| panic!("sink must not run on error"),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("acme-parent/pom.xml: "));
    match err {
        Error::WithPath { source, .. } => {
            assert!(matches!(*source, Error::UnclosedElement(_)));
        }
        _ => panic!("unexpected error: {}", err),
    }
}

#[test]
fn sink_is_skipped_when_a_later_transformation_fails() {
    let source = "<project>\n    <modelVersion>4.0.0</modelVersion>\n</project>\n";
    let err = transform(
        &[
            Transformation::add_module("acme-core"),
            Transformation::remove_container_element_if_empty(
                true,
                true,
                true,
                Vec::<String>::new(),
            ),
        ],
        "pom.xml",
        || source.to_string(),
        |_| panic!("sink must not run on error"),
    )
    .unwrap_err();
    match err {
        Error::WithPath { source, .. } => {
            assert!(matches!(*source, Error::Structural(_)));
        }
        _ => panic!("unexpected error: {}", err),
    }
}
