use yew::prelude::*;

use crate::models::Faq;

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    /// (id, pregunta)
    pub items: Vec<(String, Faq)>,
}

/// Acordeón de un solo elemento abierto; pulsar el abierto lo cierra
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<String>);

    html! {
        <div class="accordion">
            { for props.items.iter().map(|(id, faq)| {
                let expanded = open.as_deref() == Some(id.as_str());
                let onclick = {
                    let open = open.clone();
                    let id = id.clone();
                    Callback::from(move |_| {
                        let next = if open.as_deref() == Some(id.as_str()) { None } else { Some(id.clone()) };
                        open.set(next);
                    })
                };
                html! {
                    <div key={id.clone()} class={classes!("accordion-item", expanded.then_some("open"))}>
                        <button type="button" class="accordion-trigger" aria-expanded={expanded.to_string()} {onclick}>
                            <span>{ &faq.question }</span>
                            <span class="chevron">{ if expanded { "▴" } else { "▾" } }</span>
                        </button>
                        if expanded {
                            <div class="accordion-content">{ &faq.answer }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
