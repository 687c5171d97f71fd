use crate::core::options::{Dimension, OptionValue, find_option};
use gloo::console;
use yew::prelude::*;

/// Props for a single-choice dropdown bound to one style dimension.
#[derive(Properties, PartialEq)]
pub(crate) struct OptionSelectProps {
    pub dimension: Dimension,
    pub title: AttrValue,
    pub selected: OptionValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<OptionValue>,
}

#[function_component(OptionSelect)]
pub(crate) fn option_select(props: &OptionSelectProps) -> Html {
    let dimension = props.dimension;
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            match find_option(dimension, &target.value()) {
                Ok(option) => onchange.emit(option),
                Err(err) => console::error!("select value rejected", err.to_string()),
            }
        })
    };
    let id = format!("select-{}", dimension.as_str());

    html! {
        <div class={classes!("field", props.class.clone())}>
            <label class="field__title" for={id.clone()}>{props.title.clone()}</label>
            <select
                id={id}
                name={dimension.as_str()}
                class="select"
                value={props.selected.value}
                onchange={onchange}
            >
                {for dimension.options().iter().map(|option| {
                    let selected = *option == props.selected;
                    html! {
                        <option value={option.value} selected={selected}>{option.label}</option>
                    }
                })}
            </select>
        </div>
    }
}
