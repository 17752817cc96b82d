//! Sign-in / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/login`, where guards send unauthenticated visitors with the
//! requested location in `?from=`. Form rules and the submit lifecycle live in
//! `state::auth_form`; this page wires inputs to it, calls the auth service,
//! and reloads the session after a successful submit.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::state::auth::{AuthState, Role};
use crate::state::auth_form::{AuthForm, AuthMode, BannerKind, Field, IdentityProvider};
use crate::util::access::RETURN_PARAM;
use crate::util::auth::install_post_login_redirect;

fn input_class(has_error: bool) -> &'static str {
    if has_error { "auth-input auth-input--error" } else { "auth-input" }
}

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
}

fn banner_class(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "auth-banner auth-banner--success",
        BannerKind::Error => "auth-banner auth-banner--error",
    }
}

fn strength_style(score: u8) -> String {
    format!("width: {score}%")
}

fn heading(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Welcome Back", "Sign in to your account"),
        AuthMode::Register => ("Join Digi-Vent", "Create your account to get started"),
    }
}

fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    match (mode, submitting) {
        (AuthMode::Login, false) => "Sign In",
        (AuthMode::Login, true) => "Signing In...",
        (AuthMode::Register, false) => "Create Account",
        (AuthMode::Register, true) => "Creating Account...",
    }
}

/// Inline message under a field, present only while the field is invalid.
#[component]
fn FieldError(form: RwSignal<AuthForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field).map(str::to_owned))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

/// Labelled text input bound to one form field.
#[component]
fn TextField(
    form: RwSignal<AuthForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="auth-field">
            <label class="auth-field__label">{label}</label>
            <input
                class=move || input_class(form.with(|f| f.errors.contains(field)))
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_text(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field/>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
fn PasswordField(form: RwSignal<AuthForm>, field: Field, label: &'static str, placeholder: &'static str) -> impl IntoView {
    let visible = move || {
        form.with(|f| if field == Field::Password { f.show_password } else { f.show_confirm_password })
    };
    let toggle = move |_: leptos::ev::MouseEvent| {
        form.update(|f| {
            if field == Field::Password {
                f.toggle_password_visibility();
            } else {
                f.toggle_confirm_visibility();
            }
        });
    };
    let autocomplete = move || {
        if field == Field::Password && form.with(|f| f.mode == AuthMode::Login) {
            "current-password"
        } else {
            "new-password"
        }
    };

    view! {
        <div class="auth-field">
            <label class="auth-field__label">{label}</label>
            <div class="auth-field__password">
                <input
                    class=move || input_class(form.with(|f| f.errors.contains(field)))
                    type=move || if visible() { "text" } else { "password" }
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || form.with(|f| f.value(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_text(field, event_target_value(&ev)))
                />
                <button class="auth-field__reveal" type="button" on:click=toggle>
                    {move || if visible() { "Hide" } else { "Show" }}
                </button>
            </div>
            <FieldError form=form field=field/>
        </div>
    }
}

/// Strength bar under the registration password.
#[component]
fn StrengthMeter(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.mode == AuthMode::Register && !f.fields.password.is_empty())>
            <div class="strength-meter">
                <div class="strength-meter__track">
                    <div
                        class=move || format!("strength-meter__fill {}", form.with(|f| f.strength_band().css_modifier()))
                        style=move || strength_style(form.with(|f| f.strength))
                    ></div>
                </div>
                <span class="strength-meter__label">{move || form.with(|f| f.strength_band().label())}</span>
            </div>
        </Show>
    }
}

/// Role picker; required in both modes.
#[component]
fn RolePicker(form: RwSignal<AuthForm>) -> impl IntoView {
    let options = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <label class="role-option">
                    <input
                        type="radio"
                        name="role"
                        value=role.as_str()
                        prop:checked=move || form.with(|f| f.fields.role == Some(role))
                        on:change=move |_| form.update(|f| f.set_role(Some(role)))
                    />
                    <span class="role-option__label">{role.label()}</span>
                    <span class="role-option__description">{role.description()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="auth-field role-picker">
            <legend class="auth-field__label">"Select Your Role *"</legend>
            {options}
            <FieldError form=form field=Field::Role/>
        </fieldset>
    }
}

/// Sign-in / registration page with a shared field set and a tab switch.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let form = RwSignal::new(AuthForm::new());
    let query = use_query_map();
    let from = Signal::derive(move || query.with(|q| q.get(RETURN_PARAM)));

    install_post_login_redirect(auth, from, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(AuthForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let service = crate::net::api::HttpAuthService::new(config.clone());
                let outcome = request.dispatch(&service).await;
                // The page may have been left while the request was in flight.
                let accepted = form.try_update(|f| f.finish_submit(outcome)).unwrap_or(false);
                if accepted {
                    crate::state::session::load_session(auth, config).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &config);
        }
    };

    let mode = move || form.with(|f| f.mode);
    let is_register = move || mode() == AuthMode::Register;

    view! {
        <div class="auth-page">
            <a class="auth-page__back" href="/">"Back to Home"</a>
            <div class="auth-card">
                <div class="auth-card__logo">"Digi-Vent"</div>

                <div class="auth-tabs" role="tablist">
                    <button
                        type="button"
                        class=move || tab_class(mode() == AuthMode::Login)
                        on:click=move |_| form.update(|f| f.set_mode(AuthMode::Login))
                    >
                        "Sign In"
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(is_register())
                        on:click=move |_| form.update(|f| f.set_mode(AuthMode::Register))
                    >
                        "Register"
                    </button>
                </div>

                <h1 class="auth-card__title">{move || heading(mode()).0}</h1>
                <p class="auth-card__subtitle">{move || heading(mode()).1}</p>

                {move || {
                    form.with(|f| f.banner.clone())
                        .map(|banner| view! { <div class=banner_class(banner.kind) role="alert">{banner.text}</div> })
                }}

                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <Show when=is_register>
                        <TextField
                            form=form
                            field=Field::FullName
                            label="Full Name *"
                            input_type="text"
                            placeholder="Enter your full name"
                            autocomplete="name"
                        />
                    </Show>
                    <TextField
                        form=form
                        field=Field::Email
                        label="Email Address *"
                        input_type="email"
                        placeholder="Enter your email"
                        autocomplete="email"
                    />
                    <Show when=is_register>
                        <TextField
                            form=form
                            field=Field::Phone
                            label="Phone Number"
                            input_type="tel"
                            placeholder="Enter your phone number (optional)"
                            autocomplete="tel"
                        />
                    </Show>
                    <PasswordField form=form field=Field::Password label="Password *" placeholder="Enter your password"/>
                    <StrengthMeter form=form/>
                    <Show when=is_register>
                        <PasswordField
                            form=form
                            field=Field::ConfirmPassword
                            label="Confirm Password *"
                            placeholder="Confirm your password"
                        />
                    </Show>
                    <RolePicker form=form/>

                    <Show
                        when=is_register
                        fallback=move || {
                            view! {
                                <label class="auth-check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.fields.remember_me)
                                        on:change=move |ev| form.update(|f| f.set_remember_me(event_target_checked(&ev)))
                                    />
                                    "Remember me"
                                </label>
                            }
                        }
                    >
                        <label class="auth-check">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.fields.accept_terms)
                                on:change=move |ev| form.update(|f| f.set_accept_terms(event_target_checked(&ev)))
                            />
                            "I agree to the Terms of Service and Privacy Policy"
                        </label>
                        <FieldError form=form field=Field::AcceptTerms/>
                    </Show>

                    <button class="auth-submit" type="submit" disabled=move || form.with(AuthForm::is_submitting)>
                        {move || form.with(|f| submit_label(f.mode, f.is_submitting()))}
                    </button>
                </form>

                <div class="auth-divider">"Or continue with"</div>
                <div class="auth-social">
                    <button
                        type="button"
                        class="auth-social__button"
                        on:click=move |_| form.update(|f| f.social_sign_in(IdentityProvider::Google))
                    >
                        "Google"
                    </button>
                    <button
                        type="button"
                        class="auth-social__button"
                        on:click=move |_| form.update(|f| f.social_sign_in(IdentityProvider::GitHub))
                    >
                        "GitHub"
                    </button>
                </div>
            </div>
        </div>
    }
}
