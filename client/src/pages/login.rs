//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly, after email verification (`?notice=verified`), after a
//! password reset (`?notice=reset`), or with `?next=/path` from a page that
//! wants the user back afterwards. On success the session is persisted
//! through `util::auth::sign_in` so other tabs pick it up too.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::validation::{normalize_email, safe_redirect_path};

fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Banner text for the `notice` query parameter.
fn notice_message(notice: Option<&str>) -> Option<&'static str> {
    match notice? {
        "verified" => Some("Email verified. You can now sign in."),
        "reset" => Some("Password updated. Sign in with your new password."),
        _ => None,
    }
}

/// Navigation options that replace the auth form in history.
#[cfg(feature = "hydrate")]
pub(crate) fn replace_history() -> leptos_router::NavigateOptions {
    leptos_router::NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let notice = move || query.with(|q| notice_message(q.get("notice").as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let target = query.with_untracked(|q| safe_redirect_path(q.get("next").as_deref()));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(response) => {
                        crate::util::auth::sign_in(auth, &response.access, response.user);
                        navigate(&target, replace_history());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, target, auth, &navigate);
        }
    };

    view! {
        <section class="page auth">
            <div class="auth__card">
                <h1>"Sign in"</h1>
                {move || notice().map(|text| view! {
                    <p class="form__banner form__banner--notice" role="status">{text}</p>
                })}
                <form class="auth__form" on:submit=on_submit>
                    <label class="form__field">
                        <span class="form__label">"Email"</span>
                        <input
                            class="form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Password"</span>
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|e| view! { <p class="form__banner form__banner--error" role="alert">{e}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth__alt"><A href="/forgot-password">"Forgot your password?"</A></p>
                <p class="auth__alt">"New here? " <A href="/signup">"Create an account"</A></p>
            </div>
        </section>
    }
}
