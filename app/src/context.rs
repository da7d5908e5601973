use leptos::prelude::LeptosOptions;

use crate::content::ContentStore;

#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: ContentStore,
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
