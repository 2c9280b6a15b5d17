use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Register)]
pub fn register() -> Html {
    html! {
        <div class="main-container">
            <h3>{ "Register" }</h3>
            <p>{ "Registration is not open yet. Ask an administrator for an account." }</p>
            <Link<Route> to={Route::Login}>{ "Back to login" }</Link<Route>>
        </div>
    }
}
