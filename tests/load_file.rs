use grape_init::{Color, LoadError, ParseErrorKind};
use grape_init::loader::load_grapes;
use std::io::Write;
use tempfile::NamedTempFile;

fn grape_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_records_from_disk() {
    let file = grape_file(
        "# name:COLOR:parent1:parent2:regions:alt_names\n\
         Merlot:BLACK:Cabernet Franc:Magdeleine Noire:Bordeaux,California:Merlot Noir\n\
         \n\
         Chardonnay:WHITE:Pinot:Gouais blanc:Burgundy,Champagne:Beaunois,Aubaine\n",
    );

    let grapes = load_grapes(file.path()).unwrap();
    assert_eq!(grapes.len(), 2);
    assert_eq!(grapes[0].name, "Merlot");
    assert_eq!(grapes[0].regions, vec!["Bordeaux", "California"]);
    assert_eq!(grapes[1].color, Color::White);
    assert_eq!(grapes[1].alt_names, vec!["Beaunois", "Aubaine"]);
}

#[test]
fn empty_file_loads_nothing() {
    let file = grape_file("");
    assert!(load_grapes(file.path()).unwrap().is_empty());
}

#[test]
fn parse_error_names_the_file() {
    let file = grape_file("Merlot:BLACK:::Bordeaux:Noir\n# ok\nBad:PURPLE:A:B:R:N\n");

    let err = load_grapes(file.path()).unwrap_err();
    let LoadError::Parse(parse) = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(parse.line, 3);
    assert_eq!(parse.path, file.path());
    assert_eq!(
        parse.kind,
        ParseErrorKind::UnknownColor {
            value: "PURPLE".into()
        }
    );
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");

    match load_grapes(&path) {
        Err(LoadError::Io { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn bundled_data_file_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/grapes.db");
    let grapes = load_grapes(path).unwrap();
    assert!(!grapes.is_empty());
    assert!(grapes.iter().any(|g| g.name == "Merlot"));
}
