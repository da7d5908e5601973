use app::components::icons::icon_path;
use app::content::hydrate::{apply, HydrationOutcome, RemoteContent};
use app::content::{whatsapp_url, PersonalInfo, SiteContent, SocialLink, DEFAULT_CONTENT};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn overrides(json: &str) -> RemoteContent {
    serde_json::from_str(json).unwrap()
}

#[test]
fn social_override_replaces_defaults_in_order() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    let remote = overrides(
        r#"{
            "social": [
                {"name": "twitch", "url": "https://twitch.tv/lucas"},
                {"name": "github", "url": "https://github.com/lucas"}
            ]
        }"#,
    );

    assert_eq!(HydrationOutcome::Hydrated, apply(&mut content, remote));
    assert_eq!(2, content.social.len());
    assert_eq!("twitch", content.social[0].name);
    assert_eq!("github", content.social[1].name);
    // personal was not in the payload, the defaults stay
    assert_eq!(DEFAULT_CONTENT.personal, content.personal);
}

#[test]
fn empty_social_override_keeps_the_defaults() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    let remote = overrides(r#"{"social": []}"#);

    assert_eq!(HydrationOutcome::Defaults, apply(&mut content, remote));
    assert_eq!(*DEFAULT_CONTENT, content);
}

#[test]
fn empty_payload_keeps_the_defaults() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    assert_eq!(
        HydrationOutcome::Defaults,
        apply(&mut content, RemoteContent::default()),
    );
    assert_eq!(*DEFAULT_CONTENT, content);
}

#[test]
fn personal_override_replaces_the_record_wholesale() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    let remote = overrides(r#"{"personal": {"name": "Marina Duarte"}}"#);

    assert_eq!(HydrationOutcome::Hydrated, apply(&mut content, remote));
    assert_eq!("Marina Duarte", content.personal.name);
    // wholesale replacement: fields absent from the payload are reset, not
    // merged with the defaults
    assert_eq!("", content.personal.email);
    assert_eq!(None, content.personal.whatsapp);
}

#[test]
fn malformed_personal_is_treated_as_absent() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    let remote = overrides(
        r#"{
            "personal": 5,
            "social": [{"name": "github", "url": "https://github.com/lucas"}]
        }"#,
    );

    // the broken half is dropped, the valid half still applies
    assert_eq!(HydrationOutcome::Hydrated, apply(&mut content, remote));
    assert_eq!(DEFAULT_CONTENT.personal, content.personal);
    assert_eq!(1, content.social.len());
}

#[test]
fn malformed_social_is_treated_as_absent() {
    setup();

    let mut content = DEFAULT_CONTENT.clone();
    for json in [
        r#"{"social": "nope"}"#,
        r#"{"social": [{"name": "github"}]}"#,
        r#"{"social": [{"name": 1, "url": 2}]}"#,
        r#"{"social": null}"#,
    ] {
        let remote = overrides(json);
        assert_eq!(
            HydrationOutcome::Defaults,
            apply(&mut content, remote),
            "payload: {json}",
        );
        assert_eq!(*DEFAULT_CONTENT, content, "payload: {json}");
    }
}

#[test]
fn unknown_remote_keys_are_ignored() {
    setup();

    let remote = overrides(r#"{"theme": "dark", "personal": {"name": "Ana"}}"#);
    assert_eq!("Ana", remote.personal.unwrap().name);
}

#[test]
fn whatsapp_number_keeps_digits_only_in_order() {
    setup();

    let personal = PersonalInfo {
        whatsapp: Some(String::from("+55 (11) 98765-4321")),
        ..DEFAULT_CONTENT.personal.clone()
    };

    let url = whatsapp_url(&personal);
    assert!(
        url.starts_with("https://wa.me/5511987654321?text="),
        "unexpected url: {url}",
    );
}

#[test]
fn whatsapp_link_falls_back_to_the_placeholder_number() {
    setup();

    // the compiled-in defaults carry no handle
    let url = whatsapp_url(&DEFAULT_CONTENT.personal);
    assert!(
        url.starts_with("https://wa.me/5511999999999?text="),
        "unexpected url: {url}",
    );

    // a handle with no digits at all behaves like an absent one
    let personal = PersonalInfo {
        whatsapp: Some(String::from("não tenho")),
        ..DEFAULT_CONTENT.personal.clone()
    };
    assert!(whatsapp_url(&personal).starts_with("https://wa.me/5511999999999?text="));
}

#[test]
fn whatsapp_greeting_is_url_encoded() {
    setup();

    let url = whatsapp_url(&DEFAULT_CONTENT.personal);
    let (_, greeting) = url.split_once("?text=").unwrap();

    assert!(!greeting.is_empty());
    assert!(!greeting.contains(' '), "unencoded space in: {greeting}");
    assert!(!greeting.contains('!'), "unencoded `!' in: {greeting}");
    // "Olá" keeps its UTF-8 escape
    assert!(greeting.starts_with("Ol%C3%A1"), "unexpected greeting: {greeting}");
}

#[test]
fn defaults_are_fully_populated() {
    setup();

    let SiteContent { personal, social } = DEFAULT_CONTENT.clone();
    assert!(!personal.name.is_empty());
    assert!(!personal.title.is_empty());
    assert!(!personal.email.is_empty());
    assert!(!personal.location.is_empty());
    assert!(!social.is_empty());
    for SocialLink { name, url } in &social {
        assert!(!name.is_empty());
        assert!(url.starts_with("https://"), "not an absolute url: {url}");
    }
}

#[test]
fn every_default_social_name_has_an_icon() {
    setup();

    for link in &DEFAULT_CONTENT.social {
        assert!(
            icon_path(&link.name).is_some(),
            "no icon artwork for `{}'",
            link.name,
        );
    }
}

#[test]
fn unknown_icon_names_have_no_artwork() {
    setup();

    assert!(icon_path("myspace").is_none());
    assert!(icon_path("").is_none());
}

#[test]
fn icon_lookup_is_case_insensitive() {
    setup();

    assert_eq!(icon_path("GitHub"), icon_path("github"));
    assert!(icon_path("LinkedIn").is_some());
}
