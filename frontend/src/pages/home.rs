use yew::prelude::*;
use yew_router::prelude::*;

use crate::storage::{BrowserTokens, TokenStore};
use crate::Route;

/// Authenticated landing page. Bounces back to the login screen when no
/// access token is stored.
#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().unwrap();

    if BrowserTokens.get().is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let on_logout = Callback::from(move |_: MouseEvent| {
        BrowserTokens.remove();
        navigator.push(&Route::Login);
    });

    html! {
        <div class="main-container">
            <h3>{ "Welcome" }</h3>
            <p>{ "You are signed in." }</p>
            <button class="btn-primary" type="button" onclick={on_logout}>
                { "Log out" }
            </button>
        </div>
    }
}
