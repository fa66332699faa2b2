//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::SiteFooter, header::SiteHeader};
use crate::pages::{
    about::AboutPage, book::BookPage, contact::ContactPage, forgot_password::ForgotPasswordPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, reset_password::ResetPasswordPage, services::ServicesPage,
    signup::SignUpPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, keeps it in sync with storage, and sets up
/// client-side routing inside the site chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server render always starts signed out; the browser loads the stored
    // session once mounted so hydration sees matching markup.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    Effect::new(move || auth.set(AuthState::from_store(&BrowserStorage)));
    crate::util::auth::install_storage_sync(auth);

    view! {
        <Title text="Dr. JI Dental"/>
        <Meta name="description" content="20+ years of trusted dental care. Book your appointment online."/>

        <Router>
            <SiteHeader/>
            <main class="main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("book") view=BookPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
