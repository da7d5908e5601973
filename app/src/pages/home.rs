use leptos::prelude::*;

use crate::components::{About, Contact, Footer, Hero, NavBar};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <main class="home">
            <NavBar/>
            <Hero/>
            <About/>
            <Contact/>
            <Footer/>
        </main>
    }
}
