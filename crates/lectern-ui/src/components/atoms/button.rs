use yew::prelude::*;

/// Semantic role of a form button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ButtonRole {
    /// Resets the enclosing form.
    Clear,
    /// Submits the enclosing form.
    Apply,
}

impl ButtonRole {
    const fn html_type(self) -> &'static str {
        match self {
            Self::Clear => "reset",
            Self::Apply => "submit",
        }
    }

    const fn as_class(self) -> &'static str {
        match self {
            Self::Clear => "btn-clear",
            Self::Apply => "btn-apply",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    pub title: AttrValue,
    pub role: ButtonRole,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!("btn", props.role.as_class(), props.class.clone());

    html! {
        <button class={classes} type={props.role.html_type()}>
            {props.title.clone()}
        </button>
    }
}
