//! Set a new password using the emailed reset code.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::ResetPasswordRequest;
use crate::util::validation::{OTP_LEN, PASSWORD_HINT, normalize_email, normalize_otp_input};

fn validate_reset(email: &str, otp: &str, new_password: &str) -> Result<ResetPasswordRequest, &'static str> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err("Email is required.");
    }
    let otp = normalize_otp_input(otp);
    if otp.is_empty() {
        return Err("Reset code is required.");
    }
    if otp.len() != OTP_LEN {
        return Err("Enter the 6-digit code from your email.");
    }
    if new_password.is_empty() {
        return Err("New password is required.");
    }
    Ok(ResetPasswordRequest { email, otp, new_password: new_password.to_owned() })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_reset(&email.get(), &otp.get(), &new_password.get()) {
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
                match crate::net::api::reset_password(&request).await {
                    Ok(_) => navigate("/login?notice=reset", super::login::replace_history()),
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
                <h1>"Reset password"</h1>
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
                        <span class="form__label">"Reset code"</span>
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
                    <label class="form__field">
                        <span class="form__label">"New password"</span>
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <span class="form__hint">{PASSWORD_HINT}</span>
                    </label>
                    {move || error.get().map(|e| view! { <p class="form__banner form__banner--error" role="alert">{e}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Reset password" }}
                    </button>
                </form>
                <p class="auth__alt">"Need a new code? " <A href="/forgot-password">"Send another"</A></p>
            </div>
        </section>
    }
}
