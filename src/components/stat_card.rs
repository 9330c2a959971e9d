use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub icon: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

/// Tarjeta de cifra (panel admin y dashboard)
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-header">
                <span class="stat-label">{ &props.label }</span>
                <span class="stat-icon">{ &props.icon }</span>
            </div>
            <div class="stat-value">{ &props.value }</div>
            if let Some(hint) = &props.hint {
                <p class="stat-hint">{ hint }</p>
            }
        </div>
    }
}
