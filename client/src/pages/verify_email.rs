//! Email verification with the one-time code sent at sign-up.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::VerifyEmailRequest;
use crate::util::validation::{OTP_LEN, normalize_email, normalize_otp_input};

fn validate_verify(email: &str, otp: &str) -> Result<VerifyEmailRequest, &'static str> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err("Email is required.");
    }
    let otp = normalize_otp_input(otp);
    if otp.is_empty() {
        return Err("Verification code is required.");
    }
    if otp.len() != OTP_LEN {
        return Err("Enter the 6-digit code from your email.");
    }
    Ok(VerifyEmailRequest { email, otp })
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_verify(&email.get(), &otp.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_email(&request).await {
                    Ok(_) => navigate("/login?notice=verified", super::login::replace_history()),
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <section class="page auth">
            <div class="auth__card">
                <h1>"Verify your email"</h1>
                <p class="auth__lead">"Enter the 6-digit code we sent to your inbox."</p>
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
                        <span class="form__label">"Verification code"</span>
                        <input
                            class="form__input form__input--code"
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(normalize_otp_input(&event_target_value(&ev)))
                        />
                    </label>
                    {move || error.get().map(|e| view! { <p class="form__banner form__banner--error" role="alert">{e}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify email" }}
                    </button>
                </form>
                <p class="auth__alt">"Already verified? " <A href="/login">"Sign in"</A></p>
            </div>
        </section>
    }
}
