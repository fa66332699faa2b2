use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist or has moved."</p>
            <A href="/" attr:class="btn btn--primary">"Back to home"</A>
        </section>
    }
}
