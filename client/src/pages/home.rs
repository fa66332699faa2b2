//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Gentle care", "Unhurried appointments and clear explanations at every step."),
    ("Modern equipment", "Digital X-rays and intraoral cameras for precise diagnosis."),
    ("Family friendly", "Treatment for children, adults, and seniors under one roof."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <h1>"Healthy smiles, gentle care"</h1>
                <p class="hero__lead">
                    "Dr. JI Dental Care offers preventive, restorative, and cosmetic dentistry in a calm, welcoming space."
                </p>
                <div class="hero__actions">
                    <A href="/book" attr:class="btn btn--primary">"Book an appointment"</A>
                    <A href="/services" attr:class="btn btn--secondary">"Explore services"</A>
                </div>
            </div>
        </section>
        <section class="highlights">
            {HIGHLIGHTS
                .iter()
                .map(|(title, body)| {
                    view! {
                        <article class="highlights__item">
                            <h2>{*title}</h2>
                            <p>{*body}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
        <section class="cta">
            <h2>"Meet the dentist"</h2>
            <p>"Learn about our approach to comfortable, evidence-based dentistry."</p>
            <A href="/about" attr:class="btn btn--secondary">"About us"</A>
        </section>
    }
}
