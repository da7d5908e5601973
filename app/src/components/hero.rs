use leptos::prelude::*;

use crate::content::DEFAULT_CONTENT;

#[component]
pub fn Hero() -> impl IntoView {
    let personal = &DEFAULT_CONTENT.personal;

    view! {
        <section class="hero" id="inicio">
            <img
                class="hero-art"
                src="https://res.cloudinary.com/lucasferreira/image/upload/v1/portfolio/slot-neon.webp"
                alt="Ilustração em neon de uma máquina caça-níqueis estilizada sobre um fundo escuro."
            />
            <h1>{personal.name.clone()}</h1>
            <p class="hero-title">{personal.title.clone()}</p>
            <p class="hero-location">{personal.location.clone()}</p>
            <a class="hero-cta" href="#contato">"Vamos conversar"</a>
        </section>
    }
}
