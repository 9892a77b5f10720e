use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::CatalogItem;

/// Items handed over by the pricing page through history state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSeed(pub Vec<CatalogItem>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub category: String,
    pub plan: String,
    pub service: String,
    pub addon_ids: Vec<String>,
    /// Non-empty means cart mode: the form's own selection is ignored.
    pub cart: Vec<CatalogItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    SelectCategory(String),
    SelectPlan(String),
    SelectService(String),
    ToggleAddon(String),
    RemoveCartItem(String),
    Reset,
}

impl ContactFormState {
    pub fn with_cart(cart: Vec<CatalogItem>) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    pub fn is_cart_mode(&self) -> bool {
        !self.cart.is_empty()
    }

    pub fn is_addon_selected(&self, id: &str) -> bool {
        self.addon_ids.iter().any(|selected| selected == id)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => *self.fields.slot(field) = value,
            FormAction::SelectCategory(category) => {
                // Anything picked under the previous category is stale now.
                self.category = category;
                self.plan.clear();
                self.service.clear();
                self.addon_ids.clear();
            }
            FormAction::SelectPlan(plan) => {
                self.plan = plan;
                self.service.clear();
            }
            FormAction::SelectService(service) => {
                self.service = service;
                self.plan.clear();
            }
            FormAction::ToggleAddon(id) => {
                if let Some(pos) = self.addon_ids.iter().position(|selected| *selected == id) {
                    self.addon_ids.remove(pos);
                } else {
                    self.addon_ids.push(id);
                }
            }
            FormAction::RemoveCartItem(id) => self.cart.retain(|item| item.id != id),
            FormAction::Reset => *self = Self::default(),
        }
    }
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryLink, ItemKind, Price};

    fn picked() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.apply(FormAction::SelectCategory("web".into()));
        state.apply(FormAction::SelectPlan("web-basic".into()));
        state.apply(FormAction::ToggleAddon("seo-audit".into()));
        state
    }

    #[test]
    fn category_change_clears_dependent_selection() {
        for next in ["apps", "web", ""] {
            let mut state = picked();
            state.service = "web-landing".into();
            state.apply(FormAction::SelectCategory(next.into()));
            assert_eq!(state.category, next);
            assert!(state.plan.is_empty());
            assert!(state.service.is_empty());
            assert!(state.addon_ids.is_empty());
        }
    }

    #[test]
    fn plan_and_service_are_mutually_exclusive() {
        let mut state = picked();
        state.apply(FormAction::SelectService("web-landing".into()));
        assert_eq!(state.service, "web-landing");
        assert!(state.plan.is_empty());

        state.apply(FormAction::SelectPlan("web-pro".into()));
        assert_eq!(state.plan, "web-pro");
        assert!(state.service.is_empty());
        assert_eq!(state.addon_ids, vec!["seo-audit".to_string()]);
    }

    #[test]
    fn toggling_an_addon_twice_removes_it() {
        let mut state = picked();
        state.apply(FormAction::ToggleAddon("web-blog".into()));
        assert!(state.is_addon_selected("web-blog"));
        state.apply(FormAction::ToggleAddon("seo-audit".into()));
        assert_eq!(state.addon_ids, vec!["web-blog".to_string()]);
    }

    #[test]
    fn removing_the_last_cart_item_leaves_cart_mode() {
        let item = CatalogItem::new("p1", "Plan", Price::Amount(300.0), CategoryLink::One("web".into()), ItemKind::Plan);
        let mut state = ContactFormState::with_cart(vec![item]);
        assert!(state.is_cart_mode());
        state.apply(FormAction::RemoveCartItem("missing".into()));
        assert!(state.is_cart_mode());
        state.apply(FormAction::RemoveCartItem("p1".into()));
        assert!(!state.is_cart_mode());
    }

    #[test]
    fn reset_returns_to_the_initial_empty_state() {
        let item = CatalogItem::new("p1", "Plan", Price::Amount(300.0), CategoryLink::One("web".into()), ItemKind::Plan);
        let mut state = ContactFormState::with_cart(vec![item]);
        state.apply(FormAction::Edit(Field::Name, "Ana".into()));
        state.apply(FormAction::Edit(Field::Message, "Hola".into()));
        state.apply(FormAction::Reset);
        assert_eq!(state, ContactFormState::default());
    }

    #[test]
    fn reducer_leaves_the_previous_state_untouched() {
        let before = Rc::new(picked());
        let after = before.clone().reduce(FormAction::Edit(Field::Email, "ana@example.com".into()));
        assert_eq!(after.fields.get(Field::Email), "ana@example.com");
        assert!(before.fields.email.is_empty());
        assert_eq!(after.plan, before.plan);
    }
}
