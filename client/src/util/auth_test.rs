use super::*;

fn user() -> AuthUser {
    AuthUser { id: 9, email: "pat@example.com".to_owned() }
}

#[test]
fn sign_in_then_sign_out_updates_signal() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());

    sign_in(auth, "token-1", user());
    assert_eq!(auth.get_untracked().user, Some(user()));

    sign_out(auth);
    assert!(!auth.get_untracked().is_signed_in());
}

#[test]
fn storage_sync_install_is_inert_off_browser() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());
    install_storage_sync(auth);
    assert_eq!(auth.get_untracked(), AuthState::default());
}
