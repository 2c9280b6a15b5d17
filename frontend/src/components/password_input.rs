use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub input_ref: NodeRef,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

/// Password field with a show/hide toggle. The toggle is pure UI state;
/// the typed value is reported upward through `oninput`.
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let show = use_state(|| false);

    let on_toggle = {
        let show = show.clone();
        Callback::from(move |_: MouseEvent| {
            show.set(!*show);
        })
    };

    let on_input = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target().unwrap().dyn_into().unwrap();
            oninput.emit(input.value());
        })
    };

    html! {
        <>
            <input
                type={if *show { "text" } else { "password" }}
                id={props.id.clone()}
                ref={props.input_ref.clone()}
                value={props.value.clone()}
                oninput={on_input}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
            />
            <div class="show-password" onclick={on_toggle} aria-label="Toggle password visibility">
                { if *show { "Hide Password" } else { "Show Password" } }
            </div>
        </>
    }
}
