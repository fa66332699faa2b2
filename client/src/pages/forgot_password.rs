//! Request a password-reset code by email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::ForgotPasswordRequest;
use crate::util::validation::normalize_email;

fn validate_forgot(email: &str) -> Result<ForgotPasswordRequest, &'static str> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err("Email is required.");
    }
    Ok(ForgotPasswordRequest { email })
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_forgot(&email.get()) {
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
            match crate::net::api::forgot_password(&request).await {
                Ok(detail) => success.set(Some(super::detail_or(
                    detail,
                    "If that email is registered, a reset code is on its way.",
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
                <h1>"Forgot password"</h1>
                <Show
                    when=move || success.get().is_none()
                    fallback=move || view! {
                        <div class="auth__success" role="status">
                            <p>{move || success.get().unwrap_or_default()}</p>
                            <A href="/reset-password" attr:class="btn btn--primary">"Enter reset code"</A>
                        </div>
                    }
                >
                    <p class="auth__lead">"We will email you a code to reset your password."</p>
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
                        {move || error.get().map(|e| view! { <p class="form__banner form__banner--error" role="alert">{e}</p> })}
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Sending..." } else { "Send reset code" }}
                        </button>
                    </form>
                    <p class="auth__alt"><A href="/login">"Back to sign in"</A></p>
                </Show>
            </div>
        </section>
    }
}
