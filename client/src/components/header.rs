//! Site header with navigation and the session menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Primary navigation as `(path, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/book", "Book Appointment"),
    ("/contact", "Contact"),
];

/// CSS class for a nav link given the current path.
fn nav_link_class(current_path: &str, to: &str) -> &'static str {
    let current = current_path.trim_end_matches('/');
    let target = to.trim_end_matches('/');
    if current == target { "nav__link nav__link--active" } else { "nav__link" }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let close_menu = move |_: leptos::ev::MouseEvent| menu_open.set(false);

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        crate::util::auth::sign_out(auth);
    };

    view! {
        <header class="header">
            <div class="container header__inner">
                <A href="/" attr:class="header__logo" on:click=close_menu>
                    "Dr. JI Dental"
                </A>
                <button
                    type="button"
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class=move || if menu_open.get() { "nav nav--open" } else { "nav" }>
                    {NAV_LINKS
                        .iter()
                        .map(|(to, label)| {
                            view! {
                                <A
                                    href=*to
                                    attr:class=move || nav_link_class(&location.pathname.get(), to)
                                    on:click=close_menu
                                >
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <Show
                        when=move || auth.with(AuthState::is_signed_in)
                        fallback=move || {
                            view! {
                                <span class="nav__session">
                                    <A href="/login" attr:class="nav__link" on:click=close_menu>"Sign in"</A>
                                    <A href="/signup" attr:class="nav__link nav__link--cta" on:click=close_menu>
                                        "Sign up"
                                    </A>
                                </span>
                            }
                        }
                    >
                        <span class="nav__session">
                            <span class="nav__user">
                                {move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                            </span>
                            <button type="button" class="btn btn--link nav__sign-out" on:click=on_sign_out>
                                "Sign out"
                            </button>
                        </span>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
