//! Merges remotely loaded overrides over the compiled-in content.
//!
//! The payload served by `/api/data` is a JSON object with two optional
//! top-level keys, `personal` and `social`. Each key is validated on its
//! own: a key that is present but does not have the expected shape is
//! treated exactly like an absent one, so a malformed half of the payload
//! can never blank out or corrupt the rendered section.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::content::{PersonalInfo, SiteContent, SocialLink};

/// The wire shape of `/api/data`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteContent {
    #[serde(default, deserialize_with = "lenient")]
    pub personal: Option<PersonalInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub social: Option<Vec<SocialLink>>,
}

/// What the view layer gets to see. The failure reason never travels past
/// the hydration boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HydrationOutcome {
    Defaults,
    Hydrated,
}

/// Accepts the expected shape, maps everything else (including `null`) to
/// `None` instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Replaces whole top-level fields of `content` with the overrides that are
/// present. Replacement is all-or-nothing per field: a partial `personal`
/// record still replaces the record wholesale, and an empty `social` list
/// is ignored so it cannot blank out the defaults.
pub fn apply(content: &mut SiteContent, overrides: RemoteContent) -> HydrationOutcome {
    let mut outcome = HydrationOutcome::Defaults;

    if let Some(personal) = overrides.personal {
        content.personal = personal;
        outcome = HydrationOutcome::Hydrated;
    }
    if let Some(social) = overrides.social {
        if !social.is_empty() {
            content.social = social;
            outcome = HydrationOutcome::Hydrated;
        }
    }

    outcome
}
