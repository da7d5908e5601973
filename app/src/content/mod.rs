mod errors;
pub mod hydrate;

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        mod store;
        pub use store::ContentStore;
    }
}

pub use errors::{Error, Result};

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Number used in the WhatsApp link when no handle is configured, so the
/// call-to-action never renders without a destination.
pub const WHATSAPP_PLACEHOLDER_NUMBER: &str = "5511999999999";

const WHATSAPP_GREETING: &str = "Olá! Vi seu portfólio e gostaria de conversar sobre um projeto.";

// RFC 3986 unreserved characters stay as-is, everything else is escaped.
const GREETING_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// `name` doubles as the icon lookup key.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Everything one mounted contact section holds. Initialized from
/// [`DEFAULT_CONTENT`] before any asynchronous work starts, so the first
/// render is always populated.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub personal: PersonalInfo,
    pub social: Vec<SocialLink>,
}

/// Compiled-in content. Hydration never writes here, it works on a clone
/// owned by the mounted section.
pub static DEFAULT_CONTENT: LazyLock<SiteContent> = LazyLock::new(SiteContent::compiled_in);

impl SiteContent {
    fn compiled_in() -> Self {
        Self {
            personal: PersonalInfo {
                name: String::from("Lucas Ferreira"),
                title: String::from("Designer de jogos de cassino e ilustrador digital"),
                email: String::from("contato@lucasferreira.dev"),
                location: String::from("São Paulo, Brasil"),
                whatsapp: None,
            },
            social: vec![
                SocialLink {
                    name: String::from("github"),
                    url: String::from("https://github.com/lucasferreira"),
                },
                SocialLink {
                    name: String::from("linkedin"),
                    url: String::from("https://www.linkedin.com/in/lucasferreira"),
                },
                SocialLink {
                    name: String::from("instagram"),
                    url: String::from("https://www.instagram.com/lucasferreira.art"),
                },
                SocialLink {
                    name: String::from("behance"),
                    url: String::from("https://www.behance.net/lucasferreira"),
                },
                SocialLink {
                    name: String::from("dribbble"),
                    url: String::from("https://dribbble.com/lucasferreira"),
                },
            ],
        }
    }
}

/// Builds the `wa.me` deep link for the call-to-action. Only the digits of
/// the configured handle are kept, in order; a handle that is absent or
/// strips down to nothing falls back to [`WHATSAPP_PLACEHOLDER_NUMBER`].
pub fn whatsapp_url(personal: &PersonalInfo) -> String {
    let number = personal
        .whatsapp
        .as_deref()
        .map(|handle| handle.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| !digits.is_empty())
        .unwrap_or_else(|| String::from(WHATSAPP_PLACEHOLDER_NUMBER));
    let greeting = utf8_percent_encode(WHATSAPP_GREETING, GREETING_ENCODE_SET);
    format!("https://wa.me/{number}?text={greeting}")
}
