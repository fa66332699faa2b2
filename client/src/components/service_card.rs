//! Card summarizing one clinic service.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Service;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let benefits = service.benefit_items();
    let has_benefits = !benefits.is_empty();
    let highlight = service.experience_highlight.clone();
    let has_highlight = !highlight.trim().is_empty();
    let summary = if service.short_description.trim().is_empty() {
        service.description.clone()
    } else {
        service.short_description.clone()
    };

    view! {
        <article class="service-card" id=service.slug.clone()>
            <h3 class="service-card__name">{service.name.clone()}</h3>
            <p class="service-card__summary">{summary}</p>
            <Show when=move || has_highlight>
                <p class="service-card__highlight">{highlight.clone()}</p>
            </Show>
            <Show when=move || has_benefits>
                <ul class="service-card__benefits">
                    {benefits.iter().map(|b| view! { <li>{b.clone()}</li> }).collect_view()}
                </ul>
            </Show>
            <A href="/book" attr:class="btn btn--secondary service-card__cta">"Book this service"</A>
        </article>
    }
}
