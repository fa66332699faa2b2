//! About page introducing the practice's lead dentist.
//!
//! The profile comes from `/dentists/`; until it arrives (or if the backend is
//! unreachable) the page shows built-in copy so it never renders empty.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::net::types::Dentist;

/// The dentist featured on the page: the first one listed.
fn featured_dentist(dentists: Vec<Dentist>) -> Option<Dentist> {
    dentists.into_iter().next()
}

/// Static profile shown while loading or when no dentist is available.
fn fallback_dentist() -> Dentist {
    Dentist {
        id: 0,
        name: "Dr. JI".to_owned(),
        title: "Lead Dentist".to_owned(),
        bio: "With more than twenty years in general and cosmetic dentistry, Dr. JI has cared for thousands of \
              families in our community."
            .to_owned(),
        experience_years: 20,
        philosophy: "Every patient deserves to understand their treatment and feel at ease in the chair.".to_owned(),
        certifications: "Doctor of Dental Surgery\nCertified in Dental Implantology\nMember, Dental Association"
            .to_owned(),
        image: None,
    }
}

fn experience_label(years: u32) -> Option<String> {
    match years {
        0 => None,
        1 => Some("1 year of experience".to_owned()),
        n => Some(format!("{n}+ years of experience")),
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let dentist = RwSignal::new(None::<Dentist>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_dentists().await {
            Ok(list) => dentist.set(featured_dentist(list)),
            Err(e) => leptos::logging::warn!("dentist profile unavailable: {e}"),
        }
    });

    let profile = move || dentist.get().unwrap_or_else(fallback_dentist);

    view! {
        <section class="page about">
            <h1>"About us"</h1>
            {move || {
                let d = profile();
                let certifications = d.certification_list();
                view! {
                    <article class="dentist">
                        {d.image.clone().map(|src| view! {
                            <img class="dentist__photo" src=src alt=d.name.clone() />
                        })}
                        <div class="dentist__body">
                            <h2>{d.name.clone()}</h2>
                            <p class="dentist__title">{d.title.clone()}</p>
                            {experience_label(d.experience_years).map(|label| view! {
                                <p class="dentist__experience">{label}</p>
                            })}
                            <p class="dentist__bio">{d.bio.clone()}</p>
                            {(!d.philosophy.is_empty()).then(|| view! {
                                <blockquote class="dentist__philosophy">{d.philosophy.clone()}</blockquote>
                            })}
                            {(!certifications.is_empty()).then(|| view! {
                                <h3>"Certifications"</h3>
                                <ul class="dentist__certifications">
                                    {certifications.iter().map(|c| view! { <li>{c.clone()}</li> }).collect_view()}
                                </ul>
                            })}
                        </div>
                    </article>
                }
            }}
        </section>
    }
}
