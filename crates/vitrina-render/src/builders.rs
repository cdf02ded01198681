/*
 * builders.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! List builders: ordered collections from the content graph rendered into
//! element fragments.
//!
//! Every builder takes a mount-point id and is a no-op when the page has no
//! such element, so one set of builders serves partial page templates.
//! Collections are sorted (`order` ascending, `id` fallback) before
//! rendering, and every text field passes through the interpolator on its
//! way in.

use serde_json::Value;
use vitrina_content::{Card, Catalog, Detail, Kpi, OfficeLocation};
use vitrina_dom::{Element, Node, PageDocument};
use vitrina_template::interpolate_str;

/// Layout class for a grid of `count` items.
///
/// Pure function of cardinality: 0 or 1 items render single-column, 2 side
/// by side, 3 or more in a three-column grid.
pub fn grid_density_class(count: usize) -> &'static str {
    match count {
        0 | 1 => "single-column",
        2 => "two-column",
        _ => "three-column",
    }
}

fn element(name: &str) -> Element {
    Element::new(name)
}

fn text_child(name: &str, class: Option<&str>, text: String) -> Node {
    let mut el = element(name);
    if let Some(class) = class {
        el.set_attribute("class", class);
    }
    el.children.push(Node::Text(text));
    Node::Element(el)
}

/// Hero KPI strip: `<div class="kpi"><strong>…</strong><span>…</span></div>`.
pub fn build_hero_kpis(page: &mut PageDocument, mount_id: &str, kpis: &[Kpi], doc: &Value) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = kpis
        .iter()
        .map(|kpi| {
            Node::Element(
                element("div")
                    .with_class("kpi")
                    .with_child(text_child("strong", None, interpolate_str(&kpi.title, doc)))
                    .with_child(text_child("span", None, interpolate_str(&kpi.text, doc))),
            )
        })
        .collect();
    mount.set_children(children);
}

/// Card groups (about, services): heading, body, optional bullet list.
pub fn build_cards(page: &mut PageDocument, mount_id: &str, cards: &[Card], doc: &Value) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = cards
        .iter()
        .map(|card| {
            let mut article = element("article")
                .with_class("card")
                .with_child(text_child("h3", None, interpolate_str(&card.title, doc)))
                .with_child(text_child("p", None, interpolate_str(&card.text, doc)));

            if let Some(items) = &card.list {
                let mut list = element("ul").with_class("list");
                for item in items {
                    list.children
                        .push(text_child("li", None, interpolate_str(item, doc)));
                }
                article.children.push(Node::Element(list));
            }

            Node::Element(article)
        })
        .collect();
    mount.set_children(children);
}

/// Project catalog: one section card per Section, each holding a
/// density-classed grid of project detail cards.
pub fn build_project_grid(page: &mut PageDocument, mount_id: &str, catalog: &Catalog, doc: &Value) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = catalog
        .sorted_sections()
        .into_iter()
        .map(|section| {
            let mut card = element("section").with_class("card").with_child(
                Node::Element(element("div").with_class("category").with_child(text_child(
                    "h3",
                    Some("category-title"),
                    interpolate_str(&section.name, doc),
                ))),
            );

            if let Some(description) = blank_to_none(section.description.as_deref()) {
                card.children.push(text_child(
                    "p",
                    Some("category-desc"),
                    interpolate_str(description, doc),
                ));
            }

            let details = section.sorted_details();
            let mut grid = element("div")
                .with_class(format!("grid {}", grid_density_class(details.len())));
            for detail in details {
                grid.children.push(build_project_card(detail, doc));
            }
            card.children.push(Node::Element(grid));

            Node::Element(card)
        })
        .collect();
    mount.set_children(children);
}

/// One project detail card. Markup shape adapts to data completeness:
/// image, time, description, and briefing are omitted when absent or blank.
fn build_project_card(detail: &Detail, doc: &Value) -> Node {
    let mut card = element("article").with_class("project-card");

    if let Some(image) = blank_to_none(Some(detail.image.as_str())) {
        card.children.push(Node::Element(
            element("img")
                .with_attribute("src", image)
                .with_attribute("alt", interpolate_str(&detail.alt, doc))
                .with_attribute("loading", "lazy")
                .with_attribute("decoding", "async"),
        ));
    }

    card.children
        .push(text_child("h4", None, interpolate_str(&detail.name, doc)));

    if let Some(date) = blank_to_none(detail.date.as_deref()) {
        let label = blank_to_none(detail.date_label.as_deref()).unwrap_or(date);
        card.children.push(Node::Element(
            element("time")
                .with_attribute("datetime", date)
                .with_text(interpolate_str(label, doc)),
        ));
    }

    if let Some(description) = blank_to_none(detail.description.as_deref()) {
        card.children.push(text_child(
            "p",
            Some("project-desc"),
            interpolate_str(description, doc),
        ));
    }

    if let Some(briefing) = blank_to_none(detail.briefing.as_deref()) {
        card.children.push(text_child(
            "p",
            Some("project-brief"),
            interpolate_str(briefing, doc),
        ));
    }

    Node::Element(card)
}

/// Service catalog: details flattened across sections into one
/// density-classed grid of service cards.
pub fn build_service_grid(page: &mut PageDocument, mount_id: &str, catalog: &Catalog, doc: &Value) {
    build_flat_grid(page, mount_id, catalog, doc, "service-item", false);
}

/// News catalog: details flattened across sections, with a `<time>`
/// element when the entry is dated.
pub fn build_news_grid(page: &mut PageDocument, mount_id: &str, catalog: &Catalog, doc: &Value) {
    build_flat_grid(page, mount_id, catalog, doc, "news-item", true);
}

fn build_flat_grid(
    page: &mut PageDocument,
    mount_id: &str,
    catalog: &Catalog,
    doc: &Value,
    item_class: &str,
    dated: bool,
) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let details = catalog.sorted_details();
    let mut grid = element("div").with_class(format!("grid {}", grid_density_class(details.len())));

    for detail in details {
        let mut item = element("article").with_class(format!("card {}", item_class));

        if dated {
            if let Some(date) = blank_to_none(detail.date.as_deref()) {
                let label = blank_to_none(detail.date_label.as_deref()).unwrap_or(date);
                item.children.push(Node::Element(
                    element("time")
                        .with_attribute("datetime", date)
                        .with_text(interpolate_str(label, doc)),
                ));
            }
        }

        let title_class = format!("{}-title", item_class);
        item.children.push(text_child(
            "h3",
            Some(title_class.as_str()),
            interpolate_str(&detail.name, doc),
        ));

        if let Some(description) = blank_to_none(detail.description.as_deref()) {
            item.children
                .push(text_child("p", None, interpolate_str(description, doc)));
        }

        grid.children.push(Node::Element(item));
    }

    mount.set_children(vec![Node::Element(grid)]);
}

/// Contact-section location blocks.
pub fn build_contact_locations(
    page: &mut PageDocument,
    mount_id: &str,
    locations: &[OfficeLocation],
    doc: &Value,
) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = locations
        .iter()
        .enumerate()
        .map(|(index, location)| {
            let wrapper_class = if index == 0 { "mt-075" } else { "mt-09" };
            Node::Element(
                element("div")
                    .with_class(wrapper_class)
                    .with_child(text_child(
                        "h4",
                        Some("location-title"),
                        interpolate_str(&location.label, doc),
                    ))
                    .with_child(text_child(
                        "p",
                        Some("m-0 text-muted"),
                        interpolate_str(&location.contact_line, doc),
                    )),
            )
        })
        .collect();
    mount.set_children(children);
}

/// Footer location blocks: label plus one line per `footer_lines` entry.
pub fn build_footer_locations(
    page: &mut PageDocument,
    mount_id: &str,
    locations: &[OfficeLocation],
    doc: &Value,
) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = locations
        .iter()
        .map(|location| {
            let mut block = element("div").with_class("footer-location").with_child(
                text_child(
                    "h3",
                    Some("footer-subtitle"),
                    interpolate_str(&location.label, doc),
                ),
            );
            for line in &location.footer_lines {
                block.children.push(text_child(
                    "p",
                    Some("footer-text"),
                    interpolate_str(line, doc),
                ));
            }
            Node::Element(block)
        })
        .collect();
    mount.set_children(children);
}

/// Legal text: one paragraph per entry.
pub fn build_legal_paragraphs(
    page: &mut PageDocument,
    mount_id: &str,
    paragraphs: &[String],
    doc: &Value,
) {
    let Some(mount) = page.element_by_id_mut(mount_id) else {
        return;
    };

    let children = paragraphs
        .iter()
        .map(|paragraph| text_child("p", None, interpolate_str(paragraph, doc)))
        .collect();
    mount.set_children(children);
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(template: &str) -> PageDocument {
        PageDocument::parse(template).unwrap()
    }

    #[test]
    fn test_grid_density_class() {
        assert_eq!(grid_density_class(0), "single-column");
        assert_eq!(grid_density_class(1), "single-column");
        assert_eq!(grid_density_class(2), "two-column");
        assert_eq!(grid_density_class(3), "three-column");
        assert_eq!(grid_density_class(12), "three-column");
    }

    #[test]
    fn test_missing_mount_is_a_no_op() {
        let mut p = page(r#"<div id="other"></div>"#);
        let before = p.to_html();
        build_hero_kpis(&mut p, "kpis", &[], &json!({}));
        assert_eq!(p.to_html(), before);
    }

    #[test]
    fn test_hero_kpis() {
        let mut p = page(r#"<div id="kpis"></div>"#);
        let kpis = vec![
            Kpi {
                title: "120+".to_string(),
                text: "installations".to_string(),
            },
            Kpi {
                title: "{{company.years}}".to_string(),
                text: "years".to_string(),
            },
        ];
        build_hero_kpis(&mut p, "kpis", &kpis, &json!({"company": {"years": 15}}));
        assert_eq!(
            p.to_html(),
            r#"<div id="kpis"><div class="kpi"><strong>120+</strong><span>installations</span></div><div class="kpi"><strong>15</strong><span>years</span></div></div>"#
        );
    }

    #[test]
    fn test_cards_with_optional_list() {
        let mut p = page(r#"<div id="about-cards"></div>"#);
        let cards = vec![
            Card {
                title: "Mission".to_string(),
                text: "Clean power".to_string(),
                list: None,
            },
            Card {
                title: "Values".to_string(),
                text: "We believe in".to_string(),
                list: Some(vec!["Quality".to_string(), "Safety".to_string()]),
            },
        ];
        build_cards(&mut p, "about-cards", &cards, &json!({}));
        let html = p.to_html();
        assert!(html.contains("<h3>Mission</h3><p>Clean power</p></article>"));
        assert!(html.contains(r#"<ul class="list"><li>Quality</li><li>Safety</li></ul>"#));
    }

    #[test]
    fn test_project_card_omits_blank_sub_elements() {
        let detail: Detail = serde_json::from_value(json!({
            "id": 1, "section_id": 1, "slug": "bare", "name": "Bare", "alt": "Bare",
            "image": "", "description": "  "
        }))
        .unwrap();
        let Node::Element(card) = build_project_card(&detail, &json!({})) else {
            panic!("expected element");
        };
        let names: Vec<&str> = card
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["h4"]);
    }

    #[test]
    fn test_project_card_full_shape() {
        let detail: Detail = serde_json::from_value(json!({
            "id": 1, "section_id": 1, "slug": "full", "name": "Full", "alt": "Full install",
            "image": "img/full.jpg", "date": "2025-06-01", "date_label": "June 2025",
            "description": "Rooftop array", "briefing": "Commissioned in a week"
        }))
        .unwrap();
        let Node::Element(card) = build_project_card(&detail, &json!({})) else {
            panic!("expected element");
        };
        let names: Vec<&str> = card
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["img", "h4", "time", "p", "p"]);
    }

    #[test]
    fn test_news_grid_flattens_and_dates() {
        let catalog: Catalog = serde_json::from_value(json!({
            "company_id": 1,
            "sections": [{
                "id": 1, "slug": "updates", "name": "Updates",
                "details": [
                    {"id": 2, "section_id": 1, "slug": "b", "name": "Second", "alt": "b"},
                    {"id": 1, "section_id": 1, "slug": "a", "name": "First", "alt": "a",
                     "date": "2025-03-01", "date_label": "March 2025"},
                ]
            }]
        }))
        .unwrap();

        let mut p = page(r#"<div id="news-grid"></div>"#);
        build_news_grid(&mut p, "news-grid", &catalog, &json!({}));
        let html = p.to_html();

        assert!(html.contains(r#"<div class="grid two-column">"#));
        assert!(html.contains(r#"<time datetime="2025-03-01">March 2025</time>"#));
        // Sorted by id: "First" renders before "Second".
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[test]
    fn test_footer_locations() {
        let locations = vec![OfficeLocation {
            label: "Madrid".to_string(),
            contact_line: "+34 600 000 000".to_string(),
            footer_lines: vec!["Calle Mayor 1".to_string(), "28013 Madrid".to_string()],
        }];
        let mut p = page(r#"<div id="footer-locations"></div>"#);
        build_footer_locations(&mut p, "footer-locations", &locations, &json!({}));
        assert_eq!(
            p.to_html(),
            r#"<div id="footer-locations"><div class="footer-location"><h3 class="footer-subtitle">Madrid</h3><p class="footer-text">Calle Mayor 1</p><p class="footer-text">28013 Madrid</p></div></div>"#
        );
    }

    #[test]
    fn test_contact_locations_wrapper_classes() {
        let locations = vec![
            OfficeLocation {
                label: "Madrid".to_string(),
                contact_line: "line1".to_string(),
                footer_lines: vec![],
            },
            OfficeLocation {
                label: "Sevilla".to_string(),
                contact_line: "line2".to_string(),
                footer_lines: vec![],
            },
        ];
        let mut p = page(r#"<div id="contact-locations"></div>"#);
        build_contact_locations(&mut p, "contact-locations", &locations, &json!({}));
        let html = p.to_html();
        assert!(html.contains(r#"<div class="mt-075">"#));
        assert!(html.contains(r#"<div class="mt-09">"#));
    }

    #[test]
    fn test_legal_paragraphs() {
        let mut p = page(r#"<div id="legal-modal-desc"></div>"#);
        build_legal_paragraphs(
            &mut p,
            "legal-modal-desc",
            &["First.".to_string(), "Second.".to_string()],
            &json!({}),
        );
        assert_eq!(
            p.to_html(),
            r#"<div id="legal-modal-desc"><p>First.</p><p>Second.</p></div>"#
        );
    }
}
