//! Services catalogue, one card per clinic service.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::net::types::Service;

#[derive(Clone, Debug, Default, PartialEq)]
enum ServicesLoad {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<Service>),
}

/// Order services by their `order` field; ties keep backend order.
fn sorted_services(mut services: Vec<Service>) -> Vec<Service> {
    services.sort_by_key(|s| s.order);
    services
}

/// Text shown instead of the card list, if any.
fn services_hint(load: &ServicesLoad) -> Option<String> {
    match load {
        ServicesLoad::Loading => Some("Loading services...".to_owned()),
        ServicesLoad::Failed(message) => Some(format!("Could not load services. {message}")),
        ServicesLoad::Loaded(list) if list.is_empty() => {
            Some("No services are listed yet. Please check back soon.".to_owned())
        }
        ServicesLoad::Loaded(_) => None,
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let load = RwSignal::new(ServicesLoad::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = match crate::net::api::list_services().await {
            Ok(list) => ServicesLoad::Loaded(sorted_services(list)),
            Err(e) => {
                leptos::logging::warn!("services load failed: {e}");
                ServicesLoad::Failed(e.to_string())
            }
        };
        load.set(next);
    });

    view! {
        <section class="page services">
            <h1>"Our services"</h1>
            <p class="page__lead">"Comprehensive care for every stage of life."</p>
            {move || {
                let state = load.get();
                match services_hint(&state) {
                    Some(hint) => view! { <p class="services__hint">{hint}</p> }.into_any(),
                    None => {
                        let ServicesLoad::Loaded(list) = state else {
                            return ().into_any();
                        };
                        view! {
                            <div class="services__grid">
                                {list
                                    .into_iter()
                                    .map(|service| view! { <ServiceCard service=service /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
