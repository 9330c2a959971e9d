use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

/// Campo de búsqueda con icono; emite el texto en cada pulsación
#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="search-input">
            <span class="search-icon">{"🔍"}</span>
            <input type="search" value={props.value.clone()} placeholder={props.placeholder.clone()} {oninput} />
        </div>
    }
}
