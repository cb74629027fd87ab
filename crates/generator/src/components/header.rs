use leptos::prelude::*;
use retriever_site_core::{HeaderLayout, NavLink, Theme};

/// Site banner: title plus one link per navigation entry.
///
/// `Banner` stacks the title above a centered nav row across the full
/// width. `Letterhead` puts the optional logo and the title on one row
/// with the nav beneath.
#[component]
pub fn Header(
    site_title: String,
    nav_links: Vec<NavLink>,
    layout: HeaderLayout,
    logo: Option<String>,
    theme: Theme,
) -> impl IntoView {
    let (position, width, title_direction) = match layout {
        HeaderLayout::Banner => ("absolute", "100%", "column"),
        HeaderLayout::Letterhead => ("relative", "auto", "row"),
    };

    let banner_style = format!(
        "background:{};opacity:{};position:{};width:{}",
        theme.header_background, theme.header_opacity, position, width
    );
    let inner_style = format!(
        "padding:{};display:flex;justify-content:center;align-items:center;flex-direction:column",
        theme.header_padding
    );
    let title_row_style =
        format!("display:flex;align-items:center;flex-direction:{title_direction}");
    let title_style = format!(
        "font-size:{};margin:0px;color:{};text-decoration:none",
        theme.title_font_size, theme.text_color
    );

    // Only the letterhead carries a logo
    let logo_view = logo
        .filter(|_| layout == HeaderLayout::Letterhead)
        .map(|src| {
            let logo_style = format!("height:{};margin:{}", theme.logo_height, theme.link_margin);
            view! { <img src=src alt="" style=logo_style/> }
        });

    let link_style = theme.link_style();
    let links = nav_links
        .into_iter()
        .map(|link| {
            view! {
                <h3>
                    <a href={link.route} style={link_style.clone()}>
                        {link.label}
                    </a>
                </h3>
            }
        })
        .collect_view();

    view! {
        <header style=banner_style>
            <div style=inner_style>
                <div style=title_row_style>
                    {logo_view}
                    <h1 style=title_style>{site_title}</h1>
                </div>
                <br/>
                <nav style="display:flex;align-items:center;flex-direction:row">{links}</nav>
            </div>
        </header>
    }
}
