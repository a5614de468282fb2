//! Image block component

use leptos::prelude::*;

use crate::types::ImageBlock;

/// Embedded image with an optional caption.
#[component]
pub fn ImageView(image: ImageBlock) -> impl IntoView {
    let src = image.data_uri();
    let alt = image
        .caption
        .clone()
        .unwrap_or_else(|| image.source.clone());

    view! {
        <figure class="image-figure" data-source=image.source.clone()>
            <img src=src alt=alt />
            {image.caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
        </figure>
    }
}
