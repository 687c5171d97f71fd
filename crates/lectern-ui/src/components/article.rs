//! Static article region styled through the shell's CSS variables.

use crate::components::atoms::Text;
use crate::i18n::TranslationBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleProps {
    pub bundle: TranslationBundle,
}

#[function_component(Article)]
pub(crate) fn article(props: &ArticleProps) -> Html {
    let bundle = &props.bundle;

    html! {
        <article class="article">
            <Text tag="h1" size={45} weight={800} uppercase={true} class={classes!("article__title")}>
                {bundle.text("article.title", "The Reading Room")}
            </Text>
            <Text tag="p" size={22} class={classes!("article__lead")}>
                {bundle.text("article.lead", "")}
            </Text>
            {for bundle.paragraphs("article.body").into_iter().map(|paragraph| html! {
                <Text tag="p" class={classes!("article__text")}>{paragraph}</Text>
            })}
        </article>
    }
}
