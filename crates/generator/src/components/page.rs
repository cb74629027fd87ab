use leptos::prelude::*;
use retriever_site_core::NavLink;

/// Route content: heading, pre-rendered body and one outbound link
#[component]
pub fn Page(heading: String, body_html: String, outbound_link: NavLink) -> impl IntoView {
    view! {
        <div class="page">
            <h1>{heading}</h1>
            <div class="page-body" inner_html=body_html></div>
            <a href={outbound_link.route}>{outbound_link.label}</a>
        </div>
    }
}
