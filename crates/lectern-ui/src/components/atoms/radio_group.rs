use crate::core::options::{Dimension, OptionValue};
use yew::prelude::*;

/// Props for an inline radio group bound to one style dimension.
#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    pub dimension: Dimension,
    pub title: AttrValue,
    pub selected: OptionValue,
    #[prop_or_default]
    pub onchange: Callback<OptionValue>,
}

#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    let name = props.dimension.as_str();

    html! {
        <fieldset class="field radio-group">
            <legend class="field__title">{props.title.clone()}</legend>
            <div class="radio-group__options">
                {for props.dimension.options().iter().copied().map(|option| {
                    let onchange = props.onchange.clone();
                    let onclick = Callback::from(move |_| onchange.emit(option));
                    html! {
                        <label class="label cursor-pointer gap-2">
                            <input
                                type="radio"
                                name={name}
                                value={option.value}
                                class="radio"
                                checked={option == props.selected}
                                onclick={onclick}
                            />
                            <span>{option.label}</span>
                        </label>
                    }
                })}
            </div>
        </fieldset>
    }
}
