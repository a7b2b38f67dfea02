//! Titled bullet section used by the static documentation pages.

use leptos::prelude::*;

#[component]
pub fn DocSection(
    title: &'static str,
    #[prop(optional)] intro: Option<&'static str>,
    items: &'static [&'static str],
    /// Bullet glyph; a dot when omitted.
    #[prop(optional)]
    marker: Option<&'static str>,
    #[prop(optional)] tone: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("doc-section doc-section--{tone}"),
        None => "doc-section".to_owned(),
    };
    let marker = marker.unwrap_or("\u{2022}");

    view! {
        <section class=class>
            <h2>{title}</h2>
            {intro.map(|text| view! { <p class="doc-section__intro">{text}</p> })}
            <ul class="doc-section__list">
                {items
                    .iter()
                    .map(|&item| view! {
                        <li>
                            <span class="doc-section__marker">{marker}</span>
                            <span>{item}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            {children.map(|c| c())}
        </section>
    }
}
