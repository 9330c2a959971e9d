use yew::prelude::*;

use crate::utils::bar_width;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percent: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress">
            <div class={classes!("progress-fill", props.class.clone())} style={bar_width(props.percent)}></div>
        </div>
    }
}
