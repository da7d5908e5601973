// The content store only exists server side.
#![cfg(feature = "ssr")]

use std::path::PathBuf;

use app::content::{ContentStore, Error};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn overrides_are_read_from_disk() {
    setup();

    let store = ContentStore::new(PathBuf::from("tests/data/site"));
    let overrides = store.overrides().unwrap();

    let personal = overrides.personal.unwrap();
    assert_eq!("Lucas Ferreira", personal.name);
    assert_eq!(Some(String::from("+55 11 91234-5678")), personal.whatsapp);

    let social = overrides.social.unwrap();
    assert_eq!(2, social.len());
    assert_eq!("github", social[0].name);
    assert_eq!("instagram", social[1].name);
}

#[test]
fn a_missing_overrides_file_serves_no_overrides() {
    setup();

    // tests/data exists but holds no content.json
    let store = ContentStore::new(PathBuf::from("tests/data"));
    let overrides = store.overrides().unwrap();
    assert_eq!(None, overrides.personal);
    assert_eq!(None, overrides.social);
}

#[test]
fn a_malformed_overrides_file_is_an_error() {
    setup();

    let store = ContentStore::new(PathBuf::from("tests/data/malformed"));
    match store.overrides() {
        Err(Error::Deserialize { path, .. }) => {
            assert!(path.ends_with("content.json"), "unexpected path: {path:?}");
        }
        other => panic!("expected a deserialize error, got {other:?}"),
    }
}

#[test]
fn the_about_document_renders_to_html() {
    setup();

    let store = ContentStore::new(PathBuf::from("tests/data/site"));
    let html = store.about_html().unwrap();
    assert!(html.contains("<h2>"), "no heading in: {html}");
    assert!(html.contains("<strong>oito anos</strong>"), "no emphasis in: {html}");
}

#[test]
fn a_missing_about_document_is_an_error() {
    setup();

    let store = ContentStore::new(PathBuf::from("tests/data"));
    assert!(matches!(store.about_html(), Err(Error::IO { .. })));
}
