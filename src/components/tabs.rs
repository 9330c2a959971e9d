use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabsProps<T: Clone + PartialEq + 'static> {
    pub tabs: Vec<(T, String)>,
    pub active: T,
    pub on_select: Callback<T>,
}

/// Barra de pestañas genérica sobre cualquier enum de pestañas
#[function_component(Tabs)]
pub fn tabs<T: Clone + PartialEq + 'static>(props: &TabsProps<T>) -> Html {
    html! {
        <div class="tabs-list" role="tablist">
            { for props.tabs.iter().map(|(tab, label)| {
                let selected = *tab == props.active;
                let onclick = {
                    let tab = tab.clone();
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(tab.clone()))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={classes!("tabs-trigger", selected.then_some("active"))}
                        {onclick}
                    >
                        { label }
                    </button>
                }
            }) }
        </div>
    }
}
