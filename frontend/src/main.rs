use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod pages;
mod storage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/home")]
    Home,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <pages::login::Login /> },
        Route::Home => html! { <pages::home::Home /> },
        Route::Register => html! { <pages::register::Register /> },
        Route::NotFound => html! { <pages::login::Login /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
