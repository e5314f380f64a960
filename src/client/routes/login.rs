use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::{notifications::Notifications, session::SessionState};

#[component]
pub fn Login() -> Element {
    let mut session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let config = use_context::<crate::data::Config>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut registering = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let config = config.clone();
        #[cfg(feature = "web")]
        {
            let email_value = email.peek().trim().to_string();
            let password_value = password.peek().clone();
            let username_value = username.peek().trim().to_string();
            let register = *registering.peek();

            if email_value.is_empty() || password_value.is_empty() {
                notifications
                    .write()
                    .error("Email and password are required.");
                return;
            }
            if register && username_value.is_empty() {
                notifications.write().error("A username is required.");
                return;
            }
            if *submitting.peek() {
                return;
            }

            submitting.set(true);
            spawn(async move {
                let result = if register {
                    crate::data::auth::sign_up(&config, &email_value, &password_value).await
                } else {
                    crate::data::auth::sign_in(&config, &email_value, &password_value).await
                };

                match result {
                    Ok(session) => {
                        if register {
                            // Create the matching profile row; a duplicate is
                            // ignored so a retried signup stays consistent.
                            if let Err(err) =
                                crate::data::profiles::create(&config, &session, &username_value)
                                    .await
                            {
                                tracing::error!("Failed to create profile: {}", err);
                            }
                        }
                        crate::data::auth::persist_session(&session);
                        session_store.write().session = Some(session);
                        navigator.replace(Route::Home {});
                    }
                    Err(err) => {
                        tracing::error!("Authentication failed: {}", err);
                        notifications
                            .write()
                            .error("Sign in failed, check your credentials.");
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (
                &config,
                &mut session_store,
                &mut notifications,
                &mut submitting,
                &navigator,
            );
        }
    };

    rsx!(
        Title { "Sign In | Revmeet" }
        Meta {
            name: "description",
            content: "Sign in to Revmeet."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h1 { class: "card-title",
                        if *registering.read() { "Create Account" } else { "Sign In" }
                    }
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: on_submit,
                        if *registering.read() {
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Username",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: *submitting.read(),
                            if *registering.read() { "Create Account" } else { "Sign In" }
                        }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| {
                            let current = *registering.peek();
                            registering.set(!current);
                        },
                        if *registering.read() {
                            "Have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }
                }
            }
        }
    )
}
