//! Public landing page.

use leptos::prelude::*;

use crate::net::types::Pillar;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="site">
            <SiteHeader/>
            <main class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">"Selo FIEA"</h1>
                    <p class="hero__lead">
                        "Reconhecimento às indústrias alagoanas que se destacam em qualidade, "
                        "sustentabilidade e inovação tecnológica."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="/login?tab=register">
                            "Inscreva sua indústria"
                        </a>
                        <a class="btn" href="/login">
                            "Acessar portal"
                        </a>
                    </div>
                </div>
            </main>
            <section class="pillars">
                <h2 class="pillars__title">"Pilares de avaliação"</h2>
                <ul class="pillars__list">
                    {Pillar::ALL
                        .into_iter()
                        .map(|pillar| view! { <li class="pillars__item">{pillar.label()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
            <SiteFooter/>
        </div>
    }
}

/// Brand bar for the public pages.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <img src="/badge.jpg" alt="" class="site-header__logo"/>
                "Selo FIEA"
            </a>
            <a class="site-header__link" href="/login">
                "Entrar"
            </a>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© Federação das Indústrias do Estado de Alagoas"</p>
        </footer>
    }
}
