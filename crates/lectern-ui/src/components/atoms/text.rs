use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Typographic element with a configurable tag, size, and weight.
#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or(18)]
    pub size: u8,
    #[prop_or(400)]
    pub weight: u16,
    #[prop_or_default]
    pub uppercase: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    let classes = classes!(
        "text",
        format!("text--size-{}", props.size),
        format!("text--weight-{}", props.weight),
        props.uppercase.then_some("text--uppercase"),
        props.class.clone()
    );
    let mut node = VTag::new(props.tag);
    node.add_attribute("class", classes.to_string());
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
