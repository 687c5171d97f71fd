use yew::prelude::*;

/// Props for the panel toggle control.
#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    /// Whether the panel it controls is open.
    pub open: bool,
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Ref exposed to the panel for outside-click hit testing.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let classes = classes!("arrow-btn", props.open.then_some("arrow-btn--open"));
    let arrow_classes = classes!("arrow-btn__icon", props.open.then_some("arrow-btn__icon--open"));

    html! {
        <div
            ref={props.node_ref.clone()}
            role="button"
            tabindex="0"
            class={classes}
            aria-label={props.aria_label.clone()}
            aria-expanded={props.open.to_string()}
            onclick={props.onclick.clone()}
        >
            <svg class={arrow_classes} width="14" height="14" viewBox="0 0 24 24" aria-hidden="true">
                <path
                    d="M9 5l7 7-7 7"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </div>
    }
}
