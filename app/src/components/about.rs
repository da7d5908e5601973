use leptos::prelude::*;

use crate::components::Section;

// Shown whenever the about document cannot be served; the section never
// renders empty.
const FALLBACK_BIO: &str = "Crio interfaces e ilustrações para jogos de cassino há mais de \
                            oito anos, sempre atrás da próxima animação que faz os olhos \
                            brilharem. Slots, roletas e muita luz neon.";

#[component]
pub fn About() -> impl IntoView {
    let about = Resource::new_blocking(|| (), move |_| async { get_about().await });

    view! {
        <Section id="sobre" title="Sobre" subtitle="Quem está por trás das máquinas">
            {move || match about.get() {
                None => leptos::either::EitherOf3::A(view! { <p>"Carregando…"</p> }.into_view()),
                Some(Ok(html)) => leptos::either::EitherOf3::B(view! {
                    <div class="about-body" inner_html=html></div>
                }.into_view()),
                Some(Err(_)) => leptos::either::EitherOf3::C(view! {
                    <p>{FALLBACK_BIO}</p>
                }.into_view()),
            }}
        </Section>
    }
}

#[server(GetAbout, "/api", "GetJson", "about")]
pub async fn get_about() -> Result<String, ServerFnError> {
    let store = use_context::<crate::content::ContentStore>()
        .ok_or_else(|| ServerFnError::new("the content store is not in the context"))?;
    store
        .about_html()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}
