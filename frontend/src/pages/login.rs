use gloo_timers::callback::Interval;
use shared::{validate, Field, LockoutState, LoginError, SubmitStatus, LOCKOUT_SECS};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::PasswordInput;
use crate::storage::{BrowserTokens, TokenStore};
use crate::{api, Route};

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator().unwrap();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);
    let error = use_state(|| None::<String>);
    let lockout = use_state(LockoutState::default);
    let focus_field = use_state(|| None::<Field>);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    // Countdown driver. The interval exists only while locked with time
    // remaining; changing deps drops it, so at most one is ever live and
    // none survives unmount. At zero the machine is released.
    {
        let lockout_handle = lockout.clone();
        let snapshot = *lockout;
        use_effect_with((snapshot.blocked, snapshot.remaining_secs), move |_| {
            let interval = if snapshot.blocked && snapshot.remaining_secs > 0 {
                Some(Interval::new(1_000, move || {
                    let mut next = snapshot;
                    next.tick();
                    lockout_handle.set(next);
                }))
            } else {
                if snapshot.blocked {
                    let mut next = snapshot;
                    next.expire();
                    lockout_handle.set(next);
                }
                None
            };
            move || drop(interval)
        });
    }

    // Focus sink: validation signals which field needs focus, this effect
    // applies it and clears the signal.
    {
        let focus_field = focus_field.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        use_effect_with(*focus_field, move |field| {
            if let Some(field) = field {
                let target = match field {
                    Field::Email => &email_ref,
                    Field::Password => &password_ref,
                };
                if let Some(input) = target.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                focus_field.set(None);
            }
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target().unwrap().dyn_into().unwrap();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_password_input = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            password.set(value);
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();
        let error = error.clone();
        let lockout = lockout.clone();
        let focus_field = focus_field.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if lockout.is_locked() {
                error.set(Some(LoginError::LockedOut.to_string()));
                return;
            }

            let request = match validate(&email, &password) {
                Ok(request) => request,
                Err(field) => {
                    error.set(Some(LoginError::MissingFields.to_string()));
                    focus_field.set(Some(field));
                    return;
                }
            };

            status.set(SubmitStatus::Loading);

            let status = status.clone();
            let error = error.clone();
            let lockout = lockout.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&request).await {
                    Ok(resp) => {
                        BrowserTokens.set(&resp.access_token);
                        error.set(None);
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        log::warn!("login attempt failed: {}", err);
                        let mut next = *lockout;
                        let message = next.record_failure();
                        error.set(Some(message.to_string()));
                        lockout.set(next);
                    }
                }
                status.set(SubmitStatus::Idle);
            });
        })
    };

    let locked = lockout.is_locked();
    let loading = *status == SubmitStatus::Loading;

    html! {
        <div class="login">
            <div class="main-container">
                <h3>{ "Login" }</h3>
                <form onsubmit={on_submit}>
                    <div class="form-container">
                        <div class="form-group">
                            <label for="email">{ "E-mail:" }</label>
                            <input
                                type="text"
                                id="email"
                                ref={email_ref.clone()}
                                value={(*email).clone()}
                                oninput={on_email_input}
                                placeholder="Enter your email"
                                disabled={locked}
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">{ "Password:" }</label>
                            <PasswordInput
                                id="password"
                                input_ref={password_ref.clone()}
                                value={(*password).clone()}
                                oninput={on_password_input}
                                placeholder="Enter your password"
                                disabled={locked}
                            />
                        </div>

                        if let Some(err) = (*error).clone() {
                            <div class="error-message">{ err }</div>
                        }

                        if locked {
                            <div class="countdown-container">
                                <p>{ "You are blocked. Try again in:" }</p>
                                <div class="countdown">
                                    <span>{ format!("{}s", lockout.remaining_secs) }</span>
                                    <div
                                        class="progress-bar"
                                        style={format!(
                                            "width: {}%",
                                            f64::from(lockout.remaining_secs) / f64::from(LOCKOUT_SECS) * 100.0
                                        )}
                                    ></div>
                                </div>
                            </div>
                        }

                        <div class="submit-container">
                            <button
                                class="btn-primary"
                                type="submit"
                                disabled={loading || locked}
                            >
                                { if loading { "Logging in..." } else if locked { "Blocked" } else { "Login" } }
                            </button>
                        </div>

                        <div class="register-container">
                            <small>{ "Don't have an account? " }</small>
                            <Link<Route> to={Route::Register}>
                                <small>{ "Register" }</small>
                            </Link<Route>>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
