//! End-to-end rendering through the public API.

use retriever_site_core::{NavLink, SiteConfig, Theme, default_site, parse_site_toml_str};
use retriever_site_generator::{generate_site, render_footer, render_header, render_page, render_route};

#[path = "../src/components/test_support.rs"]
mod test_support;

use test_support::link_targets;

#[test]
fn header_for_retriever_robotics() {
    let config = SiteConfig {
        title: "Retriever Robotics".to_string(),
        nav_links: vec![NavLink::new("HOME", "/"), NavLink::new("SPONSOR", "/sponsor")],
        ..SiteConfig::default()
    };

    let html = render_header(&config, &Theme::default());

    assert!(html.contains("Retriever Robotics"));
    assert_eq!(link_targets(&html), vec!["/", "/sponsor"]);
}

#[test]
fn header_renders_one_link_per_nav_entry() {
    for n in 0..6 {
        let nav_links: Vec<NavLink> = (0..n)
            .map(|i| NavLink::new(format!("LINK{i}"), format!("/page-{i}")))
            .collect();
        let expected: Vec<String> = nav_links.iter().map(|l| l.route.clone()).collect();
        let config = SiteConfig {
            title: "RR".to_string(),
            nav_links,
            ..SiteConfig::default()
        };

        let html = render_header(&config, &Theme::default());
        assert_eq!(link_targets(&html), expected);
    }
}

#[test]
fn sponsor_page_links_home_once() {
    let site = default_site();
    let html = render_page(site.page("/sponsor").unwrap());

    assert!(html.contains("Sponsor us"));
    assert_eq!(link_targets(&html), vec!["/"]);
}

#[test]
fn footer_is_stable_across_renders() {
    let site = default_site();
    assert_eq!(
        render_footer(&site.partners, &site.theme),
        render_footer(&site.partners, &site.theme)
    );
}

#[test]
fn full_document_from_config() {
    let toml = r##"
[site]
title = "Retriever Robotics"

[[nav]]
label = "HOME"
route = "/"

[[nav]]
label = "SPONSOR"
route = "/sponsor"

[[partner]]
name = "UMBC"
logo = "UMBC-horizontal-color.png"
link = "/"

[[page]]
route = "/"
heading = "Welcome"
body = "We build robots."
link = { label = "Sponsor us", route = "/sponsor" }

[[page]]
route = "/sponsor"
title = "Sponsor"
heading = "Hi from the sponsor page"
body = "Sponsor us or else."
    "##;

    let site = parse_site_toml_str(toml).unwrap();
    let html = render_route(&site, "/sponsor").unwrap();

    // header nav, page link, footer partner
    assert_eq!(link_targets(&html), vec!["/", "/sponsor", "/", "/"]);
    assert!(html.contains("<title>Sponsor | Retriever Robotics</title>"));

    let generated = generate_site(&site);
    assert_eq!(generated.pages.len(), 2);
}
