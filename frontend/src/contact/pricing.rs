use crate::catalog::{Catalog, CatalogItem, ItemKind};
use super::state::ContactFormState;

pub fn sum_prices<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> f64 {
    items.into_iter().map(|item| item.price.amount()).sum()
}

/// The line items currently driving the running total.
#[derive(Debug, PartialEq)]
pub struct Quote<'a> {
    pub items: Vec<&'a CatalogItem>,
    pub total: f64,
}

/// Plan first, then standalone service. Only one of the two is ever set.
pub fn resolve_base<'a>(state: &ContactFormState, catalog: &'a Catalog) -> Option<&'a CatalogItem> {
    catalog
        .base_item(&state.plan)
        .or_else(|| catalog.base_item(&state.service))
}

/// Selected add-ons that still belong to the chosen category, in click order.
pub fn selected_addons<'a>(state: &ContactFormState, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
    if state.category.is_empty() {
        return Vec::new();
    }
    state
        .addon_ids
        .iter()
        .filter_map(|id| catalog.item(id))
        .filter(|item| item.kind == ItemKind::Addon && item.belongs_to(&state.category))
        .collect()
}

pub fn quote<'a>(state: &'a ContactFormState, catalog: &'a Catalog) -> Quote<'a> {
    let items: Vec<&CatalogItem> = if state.is_cart_mode() {
        state.cart.iter().collect()
    } else {
        resolve_base(state, catalog)
            .into_iter()
            .chain(selected_addons(state, catalog))
            .collect()
    };
    let total = sum_prices(items.iter().copied());
    Quote { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, CategoryLink, Price};
    use crate::contact::state::FormAction;

    fn manual(category: &str, plan: &str, addons: &[&str]) -> ContactFormState {
        let mut state = ContactFormState::default();
        state.apply(FormAction::SelectCategory(category.into()));
        if !plan.is_empty() {
            state.apply(FormAction::SelectPlan(plan.into()));
        }
        for addon in addons {
            state.apply(FormAction::ToggleAddon((*addon).into()));
        }
        state
    }

    #[test]
    fn running_total_is_base_plus_selected_addons() {
        let state = manual("web", "web-basic", &["seo-audit", "web-blog"]);
        let quote = quote(&state, catalog());
        assert_eq!(quote.total, 820.0);
        let ids: Vec<&str> = quote.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["web-basic", "seo-audit", "web-blog"]);
    }

    #[test]
    fn bonuses_never_enter_the_running_total() {
        let state = manual("web", "web-basic", &[]);
        let quote = quote(&state, catalog());
        assert_eq!(quote.items.len(), 1);
        assert_eq!(quote.total, 500.0);
    }

    #[test]
    fn addons_from_another_category_are_ignored() {
        let mut state = manual("branding", "branding-start", &[]);
        state.addon_ids.push("web-blog".into());
        state.addon_ids.push("apps-qa".into());
        assert_eq!(quote(&state, catalog()).total, 350.0);
    }

    #[test]
    fn plan_wins_when_both_ids_are_present() {
        let mut state = manual("web", "", &[]);
        state.plan = "web-pro".into();
        state.service = "web-landing".into();
        assert_eq!(resolve_base(&state, catalog()).map(|i| i.id.as_str()), Some("web-pro"));

        state.plan.clear();
        assert_eq!(resolve_base(&state, catalog()).map(|i| i.id.as_str()), Some("web-landing"));
    }

    #[test]
    fn cart_total_ignores_local_selection() {
        let mut state = ContactFormState::with_cart(vec![
            CatalogItem::new("p1", "Plan", Price::Amount(300.0), CategoryLink::One("web".into()), ItemKind::Plan),
            CatalogItem::new("a1", "Extra", Price::Label("Incluido".into()), CategoryLink::One("web".into()), ItemKind::Bonus),
        ]);
        state.category = "web".into();
        state.plan = "web-ecommerce".into();
        state.addon_ids.push("seo-audit".into());

        let quote = quote(&state, catalog());
        assert_eq!(quote.total, 300.0);
        assert_eq!(quote.items.len(), 2);
    }

    #[test]
    fn empty_selection_totals_zero() {
        let state = ContactFormState::default();
        let quote = quote(&state, catalog());
        assert!(quote.items.is_empty());
        assert_eq!(quote.total, 0.0);
    }
}
