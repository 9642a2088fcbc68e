use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use phala_landing::config::SiteConfig;
use phala_landing::content::{FEATURE_HIGHLIGHTS, FOOTER_COLUMNS, USE_CASES};
use phala_landing::disclosure::{DisclosureList, DisclosureMode};
use phala_landing::render_page;
use phala_landing::sections::Details;

fn render_item(list: RwSignal<DisclosureList>, idx: usize) -> String {
    view! {
        <Details idx=idx list=list class="faq-item" summary="What is a Phat Contract?">
            <p>"An offchain program."</p>
        </Details>
    }
    .to_html()
}

/// Opening tags of every disclosure body.
fn body_tags(html: &str) -> Vec<&str> {
    html.match_indices("class=\"body\"")
        .map(|(at, _)| {
            let start = html[..at].rfind('<').unwrap();
            let end = at + html[at..].find('>').unwrap();
            &html[start..=end]
        })
        .collect()
}

fn is_hidden(tag: &str) -> bool {
    tag.trim_end_matches(['>', '/'])
        .split_whitespace()
        .any(|attr| attr == "hidden" || attr.starts_with("hidden="))
}

#[test]
fn renders_full_document() {
    let html = render_page(&SiteConfig::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html"));
    for id in [
        "hero",
        "features",
        "product-lines",
        "how-it-works",
        "highlights",
        "subscription",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
    assert!(html.contains("<footer"));
}

#[test]
fn every_disclosure_summary_is_rendered() {
    let html = render_page(&SiteConfig::default());

    for feature in FEATURE_HIGHLIGHTS {
        assert!(html.contains(feature.summary), "{}", feature.summary);
    }
    for use_case in USE_CASES {
        assert!(html.contains(use_case.summary), "{}", use_case.summary);
    }
}

#[test]
fn disclosure_bodies_start_collapsed() {
    let html = render_page(&SiteConfig::default());

    let items = FEATURE_HIGHLIGHTS.len() + USE_CASES.len();
    assert_eq!(html.matches("data-state=\"closed\"").count(), items);
    assert!(!html.contains("data-state=\"open\""));

    let bodies = body_tags(&html);
    assert_eq!(bodies.len(), items);
    for tag in bodies {
        assert!(is_hidden(tag), "{tag}");
    }
}

#[test]
fn footer_and_stats_content() {
    let html = render_page(&SiteConfig::default());

    for group in FOOTER_COLUMNS.iter().flat_map(|c| c.groups) {
        assert!(html.contains(group.heading), "{}", group.heading);
    }
    assert!(html.contains("161k vCPU"));
    assert!(html.contains("Online Workers"));
    assert!(html.contains("LIVE !"));
}

#[test]
fn brand_comes_from_config() {
    let mut config = SiteConfig::default();
    config.site.brand = "Acme".into();
    config.site.app_url = "https://app.example.org".into();

    let html = render_page(&config);

    assert!(html.contains("Acme Logo"));
    assert!(html.contains("https://app.example.org"));
}

#[test]
fn details_body_follows_state() {
    let owner = Owner::new();
    owner.with(|| {
        let list = RwSignal::new(DisclosureList::new(DisclosureMode::Independent, 0..2));

        let collapsed = render_item(list, 1);
        assert!(collapsed.contains("What is a Phat Contract?"));
        assert!(collapsed.contains("data-state=\"closed\""));
        assert!(collapsed.contains("aria-expanded=\"false\""));
        assert!(is_hidden(body_tags(&collapsed)[0]));

        list.update(|l| {
            l.toggle(1);
        });
        let expanded = render_item(list, 1);
        assert!(expanded.contains("What is a Phat Contract?"));
        assert!(expanded.contains("data-state=\"open\""));
        assert!(expanded.contains("aria-expanded=\"true\""));
        assert!(!is_hidden(body_tags(&expanded)[0]));

        // the sibling is untouched
        let sibling = render_item(list, 0);
        assert!(sibling.contains("data-state=\"closed\""));

        list.update(|l| {
            l.toggle(1);
        });
        assert!(render_item(list, 1).contains("data-state=\"closed\""));
    });
}
