//! The typed content model.
//!
//! Every struct deserializes leniently: all fields default, unknown fields
//! are ignored. The validator, not the deserializer, is where content gaps
//! get reported.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site infrastructure document: language, legal text, UI labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDocument {
    pub infrastructure: Infrastructure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    /// Page language, bound to the root element's `lang` attribute.
    pub lang: Option<String>,

    pub legal: Legal,

    /// Free-form UI label strings consumed by collaborator components
    /// through path bindings; no fixed schema.
    pub ui: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legal {
    pub paragraphs: Vec<String>,
}

/// Organization profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyDocument {
    pub id: i64,
    pub brand: Brand,
    pub hero: Hero,
    pub about: CardGroup,
    pub services: CardGroup,
    pub locations: Vec<OfficeLocation>,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub logo_src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub kpis: Vec<Kpi>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardGroup {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: String,
    pub text: String,
    pub list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeLocation {
    pub label: String,
    pub contact_line: String,
    pub footer_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub whatsapp_text: String,
}

/// A catalog document (projects, services, news): an ordered set of
/// sections belonging to one organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub company_id: i64,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    pub id: i64,
    pub section_id: i64,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub briefing: Option<String>,
    /// Image reference; must stay a site-relative path.
    pub image: String,
    pub alt: String,
    pub order: Option<i64>,
    pub date: Option<String>,
    pub date_label: Option<String>,
}

impl Catalog {
    /// Sections in render order: `order` ascending, `id` as fallback and
    /// tiebreak.
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| (s.order.unwrap_or(s.id), s.id));
        sections
    }

    /// All details flattened across sections: outer collection sorted
    /// first, then each inner one, giving a stable concatenation.
    pub fn sorted_details(&self) -> Vec<&Detail> {
        self.sorted_sections()
            .into_iter()
            .flat_map(|s| s.sorted_details())
            .collect()
    }
}

impl Section {
    /// Details in render order: `order` ascending, `id` as fallback and
    /// tiebreak.
    pub fn sorted_details(&self) -> Vec<&Detail> {
        let mut details: Vec<&Detail> = self.details.iter().collect();
        details.sort_by_key(|d| (d.order.unwrap_or(d.id), d.id));
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lenient_defaults_for_missing_fields() {
        let detail: Detail = serde_json::from_value(json!({"id": 3, "slug": "x"})).unwrap();
        assert_eq!(detail.id, 3);
        assert_eq!(detail.name, "");
        assert_eq!(detail.image, "");
        assert_eq!(detail.date, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let section: Section =
            serde_json::from_value(json!({"id": 1, "slug": "s", "internal_notes": "x"})).unwrap();
        assert_eq!(section.id, 1);
    }

    #[test]
    fn test_sections_sort_by_order_then_id() {
        let catalog: Catalog = serde_json::from_value(json!({
            "company_id": 1,
            "sections": [
                {"id": 1, "slug": "c"},
                {"id": 2, "slug": "a", "order": 0},
                {"id": 3, "slug": "b", "order": 1},
            ]
        }))
        .unwrap();
        let slugs: Vec<&str> = catalog
            .sorted_sections()
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        // Sort keys: a=(0,2), c=(1,1) via id fallback, b=(1,3).
        assert_eq!(slugs, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_flattened_details_sort_outer_then_inner() {
        let catalog: Catalog = serde_json::from_value(json!({
            "company_id": 1,
            "sections": [
                {"id": 2, "slug": "later", "details": [
                    {"id": 1, "section_id": 2, "slug": "l1"},
                ]},
                {"id": 1, "slug": "first", "details": [
                    {"id": 2, "section_id": 1, "slug": "f2"},
                    {"id": 1, "section_id": 1, "slug": "f1"},
                ]},
            ]
        }))
        .unwrap();
        let slugs: Vec<&str> = catalog
            .sorted_details()
            .iter()
            .map(|d| d.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["f1", "f2", "l1"]);
    }
}
