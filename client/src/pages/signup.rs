//! Account sign-up page.
//!
//! A successful sign-up sends a verification code by email; the success view
//! points the user at `/verify-email` to enter it.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::SignupRequest;
use crate::util::validation::{NAME_MIN_CHARS, PASSWORD_HINT, normalize_email};

/// Check sign-up input, reporting the first failing rule.
fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    if name.chars().count() < NAME_MIN_CHARS {
        return Err("Name must be at least 2 characters.");
    }
    let email = normalize_email(email);
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email,
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(detail) => success.set(Some(super::detail_or(
                    detail,
                    "Account created. Check your email for a verification code.",
                ))),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="page auth">
            <div class="auth__card">
                <h1>"Create an account"</h1>
                <Show
                    when=move || success.get().is_none()
                    fallback=move || view! {
                        <div class="auth__success" role="status">
                            <p>{move || success.get().unwrap_or_default()}</p>
                            <A href="/verify-email" attr:class="btn btn--primary">"Verify your email"</A>
                        </div>
                    }
                >
                    <form class="auth__form" on:submit=on_submit>
                        <label class="form__field">
                            <span class="form__label">"Full name"</span>
                            <input
                                class="form__input"
                                type="text"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
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
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <span class="form__hint">{PASSWORD_HINT}</span>
                        </label>
                        <label class="form__field">
                            <span class="form__label">"Confirm password"</span>
                            <input
                                class="form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        {move || error.get().map(|e| view! { <p class="form__banner form__banner--error" role="alert">{e}</p> })}
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                        </button>
                    </form>
                    <p class="auth__alt">"Already have an account? " <A href="/login">"Sign in"</A></p>
                </Show>
            </div>
        </section>
    }
}
