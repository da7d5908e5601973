mod about;
mod contact;
mod hero;
pub mod icons;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;

use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="#inicio">"Lucas Ferreira"</a></li>
                <li><a href="#sobre">"Sobre"</a></li>
                <li><a href="#contato">"Contato"</a></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#inicio"><small>{"\u{2191}"} Copyright {"\u{24d2}"}2026, Lucas Ferreira {"\u{2191}"}</small></a>
            </p>
        </footer>
    }
}

#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section" id=id>
            <header class="section-header">
                <h2>{title}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </header>
            {children()}
        </section>
    }
}
