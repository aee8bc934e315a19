//! Clickable dashboard tile linking to a portal section.

use leptos::prelude::*;

/// Accent colors available for the tile icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Indigo,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Blue => "nav-card__icon nav-card__icon--blue",
            Self::Green => "nav-card__icon nav-card__icon--green",
            Self::Yellow => "nav-card__icon nav-card__icon--yellow",
            Self::Indigo => "nav-card__icon nav-card__icon--indigo",
        }
    }
}

#[component]
pub fn NavCard(
    href: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    tone: Tone,
) -> impl IntoView {
    view! {
        <a class="nav-card" href=href>
            <div class="nav-card__head">
                <span class=tone.class() aria-hidden="true">{icon}</span>
                <h3 class="nav-card__title">{title}</h3>
            </div>
            <p class="nav-card__description">{description}</p>
            <span class="nav-card__cta">"Acessar →"</span>
        </a>
    }
}
