use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::SocialIcon;
use crate::components::Section;
use crate::content::hydrate::{self, HydrationOutcome, RemoteContent};
use crate::content::{whatsapp_url, Error, DEFAULT_CONTENT};

/// Contact section. Mounts with the compiled-in content and hydrates it
/// once from `/api/data`; whatever goes wrong with that request, the
/// defaults stay on screen.
#[component]
pub fn Contact() -> impl IntoView {
    let content = RwSignal::new(DEFAULT_CONTENT.clone());

    // One fetch per mount. Effects only run on the client, after the
    // defaults have already been rendered.
    Effect::new(move |_| {
        spawn_local(async move {
            match get_site_data().await {
                Ok(overrides) => {
                    let mut next = content.get_untracked();
                    if hydrate::apply(&mut next, overrides) == HydrationOutcome::Hydrated {
                        // try_set refuses the write once the section has
                        // been unmounted.
                        if content.try_set(next).is_some() {
                            log::debug!("contact data arrived after the section unmounted");
                        }
                    }
                }
                Err(error) => {
                    log::warn!(
                        "keeping the compiled-in contact data: {}",
                        Error::classify(&error)
                    );
                }
            }
        });
    });

    let whatsapp = move || content.with(|c| whatsapp_url(&c.personal));
    let social = move || {
        content.with(|c| {
            c.social
                .iter()
                .map(|link| {
                    view! {
                        <a
                            class="social-link"
                            href=link.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            title=link.name.clone()
                        >
                            <SocialIcon name=link.name.clone()/>
                        </a>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Section id="contato" title="Contato" subtitle="Vamos criar algo incrível juntos">
            <div class="social">
                <p class="social-label">"Redes Sociais"</p>
                <div class="social-row">{social}</div>
            </div>

            <div class="cta-card">
                <span class="cta-emoji">"💬"</span>
                <h3>"Pronto para o próximo jackpot?"</h3>
                <p class="cta-pitch">
                    "Vamos criar algo épico juntos. Clique abaixo e fale comigo direto no WhatsApp!"
                </p>
                <a class="cta-button" href=whatsapp target="_blank" rel="noopener noreferrer">
                    <SocialIcon name="whatsapp"/>
                    "Falar no WhatsApp"
                </a>
            </div>

            <div class="reply-card">
                <span class="reply-emoji">"🎰"</span>
                <div>
                    <p class="reply-title">"Resposta rápida garantida"</p>
                    <p class="reply-detail">"Normalmente respondo em poucos minutos"</p>
                </div>
            </div>
        </Section>
    }
}

#[server(GetSiteData, "/api", "GetJson", "data")]
pub async fn get_site_data() -> Result<RemoteContent, ServerFnError> {
    let store = use_context::<crate::content::ContentStore>()
        .ok_or_else(|| ServerFnError::new("the content store is not in the context"))?;
    store
        .overrides()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}
