use leptos::prelude::*;
use retriever_site_core::{Partner, Theme};

/// Partner logos, centered in a row and pinned to the bottom edge
#[component]
pub fn Footer(partners: Vec<Partner>, theme: Theme) -> impl IntoView {
    let footer_style = format!(
        "background:{};height:{};position:absolute;bottom:0;width:100%",
        theme.footer_background, theme.footer_height
    );

    let link_style = theme.link_style();
    let logos = partners
        .into_iter()
        .map(|partner| {
            let img_style = match partner.width {
                Some(width) => format!(
                    "height:{};width:{}px;margin-bottom:0px",
                    theme.logo_height, width
                ),
                None => format!("height:{};margin-bottom:0px", theme.logo_height),
            };
            view! {
                <a href={partner.link} style={link_style.clone()}>
                    <img src={partner.logo} alt={partner.name} style=img_style/>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer style=footer_style>
            <div style="display:flex;justify-content:center;align-items:center;flex-direction:row">
                {logos}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use crate::components::render_footer;
    use crate::components::test_support::link_targets;
    use retriever_site_core::{Partner, Theme, default_site};

    #[test]
    fn test_footer_renders_each_partner() {
        let site = default_site();
        let html = render_footer(&site.partners, &site.theme);

        assert_eq!(link_targets(&html), vec!["/", "/"]);
        assert!(html.contains(r#"src="/UMBC-horizontal-color.png""#));
        assert!(html.contains(r#"src="/retrieverRoboticsBW.png""#));
        assert!(html.contains("width:90px"));
        assert!(html.contains("bottom:0"));
    }

    #[test]
    fn test_footer_is_idempotent() {
        let site = default_site();
        let first = render_footer(&site.partners, &site.theme);
        let second = render_footer(&site.partners, &site.theme);
        assert_eq!(first, second);

        assert_eq!(
            render_footer(&[], &Theme::default()),
            render_footer(&[], &Theme::default())
        );
    }

    #[test]
    fn test_footer_without_partners() {
        let html = render_footer(&[], &Theme::default());
        assert!(html.contains("<footer"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_footer_partner_link_target() {
        let partners = vec![Partner {
            name: "UMBC".to_string(),
            logo: "/umbc.png".to_string(),
            link: "/sponsor".to_string(),
            width: None,
        }];
        let html = render_footer(&partners, &Theme::default());
        assert_eq!(link_targets(&html), vec!["/sponsor"]);
        assert!(html.contains(r#"alt="UMBC""#));
        assert!(html.contains(r#"style="height:90px;margin-bottom:0px"#));
        assert!(!html.contains("width:90px"));
    }
}
