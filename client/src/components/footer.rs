//! Site footer with quick links and practice contact details.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::NAV_LINKS;
use crate::util::calendar::today;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = today().year();

    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__brand">
                    <A href="/" attr:class="footer__logo">"Dr. JI Dental"</A>
                    <p>"20+ years of trusted dental care. Your smile is our priority."</p>
                </div>
                <div class="footer__links">
                    <h4>"Quick Links"</h4>
                    {NAV_LINKS
                        .iter()
                        .map(|(to, label)| view! { <A href=*to>{*label}</A> })
                        .collect_view()}
                </div>
                <div class="footer__contact">
                    <h4>"Contact"</h4>
                    <p>"123 Dental Care Ave"</p>
                    <p>"Suite 100"</p>
                    <p>"Phone: (555) 123-4567"</p>
                    <p>"Email: info@drjidental.com"</p>
                </div>
            </div>
            <div class="footer__bottom">
                <div class="container">
                    <p>{format!("© {year} Dr. JI Dental Care. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
