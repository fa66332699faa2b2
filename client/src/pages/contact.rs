//! Static contact details.

use leptos::prelude::*;
use leptos_router::components::A;

const CLINIC_ADDRESS: &str = "123 Dental Care Ave, Suite 100";
const CLINIC_PHONE: &str = "(555) 123-4567";
const CLINIC_PHONE_HREF: &str = "tel:+15551234567";
const CLINIC_EMAIL: &str = "info@drjidental.com";

const OPENING_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 1:00 PM"),
    ("Sunday", "Closed"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page contact">
            <h1>"Contact us"</h1>
            <div class="contact__grid">
                <div class="contact__details">
                    <h2>"Visit"</h2>
                    <p>{CLINIC_ADDRESS}</p>
                    <h2>"Call"</h2>
                    <p><a href=CLINIC_PHONE_HREF>{CLINIC_PHONE}</a></p>
                    <h2>"Email"</h2>
                    <p><a href=format!("mailto:{CLINIC_EMAIL}")>{CLINIC_EMAIL}</a></p>
                </div>
                <div class="contact__hours">
                    <h2>"Opening hours"</h2>
                    <dl>
                        {OPENING_HOURS
                            .iter()
                            .map(|(days, hours)| view! {
                                <dt>{*days}</dt>
                                <dd>{*hours}</dd>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
            <p class="contact__cta">
                "Prefer to pick a time yourself? "
                <A href="/book">"Book online"</A>
            </p>
        </section>
    }
}
