use std::collections::HashMap;
use std::fmt;

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

mod data;

/// Either a numeric amount in USD or a display label such as "Incluido".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    /// Contribution to a total. Labels never count.
    pub fn amount(&self) -> f64 {
        match self {
            Price::Amount(value) => *value,
            Price::Label(_) => 0.0,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(value) => write!(f, "${}", crate::format::format_amount(*value)),
            Price::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Plan,
    Addon,
    Bonus,
    #[serde(rename = "servicio")]
    Service,
}

impl ItemKind {
    /// Plans and standalone services are the two kinds a quote is built on.
    pub fn is_base(self) -> bool {
        matches!(self, ItemKind::Plan | ItemKind::Service)
    }
}

/// Add-ons and bonuses may be shared between categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryLink {
    One(String),
    Many(Vec<String>),
}

impl CategoryLink {
    pub fn links(&self, category_id: &str) -> bool {
        match self {
            CategoryLink::One(id) => id == category_id,
            CategoryLink::Many(ids) => ids.iter().any(|id| id == category_id),
        }
    }

    pub fn primary(&self) -> Option<&str> {
        match self {
            CategoryLink::One(id) => Some(id.as_str()),
            CategoryLink::Many(ids) => ids.first().map(String::as_str),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub category_id: CategoryLink,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, price: Price, category_id: CategoryLink, kind: ItemKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category_id,
            kind,
        }
    }

    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id.links(category_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Label used in the contact form's category dropdown.
    pub name2: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: &str, name: &str, name2: &str, slug: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            name2: name2.to_string(),
            slug: slug.to_string(),
        }
    }
}

pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, items: Vec<CatalogItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if by_id.contains_key(&item.id) {
                warn!("Duplicate catalog id {}, keeping the first entry", item.id);
                continue;
            }
            by_id.insert(item.id.clone(), index);
        }
        Self { categories, items, by_id }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    /// Looks up a plan or standalone service. Other kinds never act as a base.
    pub fn base_item(&self, id: &str) -> Option<&CatalogItem> {
        if id.is_empty() {
            return None;
        }
        self.item(id).filter(|item| item.kind.is_base())
    }

    pub fn items_of<'a>(&'a self, category_id: &str, kind: ItemKind) -> Vec<&'a CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.kind == kind && item.belongs_to(category_id))
            .collect()
    }

    pub fn plans(&self, category_id: &str) -> Vec<&CatalogItem> {
        self.items_of(category_id, ItemKind::Plan)
    }

    pub fn services(&self, category_id: &str) -> Vec<&CatalogItem> {
        self.items_of(category_id, ItemKind::Service)
    }

    pub fn addons(&self, category_id: &str) -> Vec<&CatalogItem> {
        self.items_of(category_id, ItemKind::Addon)
    }

    pub fn bonuses(&self, category_id: &str) -> Vec<&CatalogItem> {
        self.items_of(category_id, ItemKind::Bonus)
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(data::categories(), data::items()));

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prices_count_as_zero() {
        assert_eq!(Price::Amount(250.0).amount(), 250.0);
        assert_eq!(Price::Label("Incluido".into()).amount(), 0.0);
    }

    #[test]
    fn items_serialize_with_original_field_names() {
        let item = CatalogItem::new(
            "seo-audit",
            "Auditoría SEO",
            Price::Amount(100.0),
            CategoryLink::Many(vec!["web".into(), "seo".into()]),
            ItemKind::Addon,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["categoryId"], serde_json::json!(["web", "seo"]));
        assert_eq!(json["type"], "addon");
        assert_eq!(json["price"], 100.0);

        let service: CatalogItem = serde_json::from_str(
            r#"{"id":"s1","name":"Soporte","price":"Incluido","categoryId":"web","type":"servicio"}"#,
        )
        .unwrap();
        assert_eq!(service.kind, ItemKind::Service);
        assert_eq!(service.price, Price::Label("Incluido".into()));
        assert_eq!(service.category_id, CategoryLink::One("web".into()));
    }

    #[test]
    fn shared_addons_show_up_in_every_linked_category() {
        let catalog = catalog();
        let in_web = catalog.addons("web").iter().any(|a| a.id == "seo-audit");
        let in_seo = catalog.addons("seo").iter().any(|a| a.id == "seo-audit");
        assert!(in_web && in_seo);
    }

    #[test]
    fn base_lookup_ignores_addons_and_empty_ids() {
        let catalog = catalog();
        assert!(catalog.base_item("web-basic").is_some());
        assert!(catalog.base_item("seo-audit").is_none());
        assert!(catalog.base_item("").is_none());
    }

    #[test]
    fn duplicate_ids_keep_the_first_entry() {
        let catalog = Catalog::new(
            vec![Category::new("web", "Web", "Web", "web")],
            vec![
                CatalogItem::new("p1", "First", Price::Amount(1.0), CategoryLink::One("web".into()), ItemKind::Plan),
                CatalogItem::new("p1", "Second", Price::Amount(2.0), CategoryLink::One("web".into()), ItemKind::Plan),
            ],
        );
        assert_eq!(catalog.item("p1").map(|i| i.name.as_str()), Some("First"));
    }

    #[test]
    fn every_category_has_a_slug_lookup() {
        let catalog = catalog();
        for category in catalog.categories() {
            assert_eq!(catalog.category_by_slug(&category.slug), Some(category));
        }
    }
}
