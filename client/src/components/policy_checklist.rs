//! Live password-policy feedback list.

use leptos::prelude::*;

use crate::util::password_policy::PasswordPolicy;

#[component]
pub fn PolicyChecklist(#[prop(into)] policy: Signal<PasswordPolicy>) -> impl IntoView {
    view! {
        <ul class="policy-list">
            {move || {
                policy
                    .get()
                    .items()
                    .into_iter()
                    .map(|(text, met)| {
                        view! {
                            <li class="policy-list__item" class:policy-list__item--met=met>
                                <span class="policy-list__mark" aria-hidden="true">
                                    {if met { "✓" } else { "✗" }}
                                </span>
                                {text}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
