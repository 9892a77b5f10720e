use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogItem};
use crate::config;
use super::pricing::{resolve_base, selected_addons, sum_prices};
use super::state::{ContactFormState, FormAction};

/// JSON body posted to the contact endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub category: String,
    pub plan: String,
    pub service: String,
    pub selected_addon_ids: Vec<String>,
    pub selected_list: Vec<CatalogItem>,
    pub total: f64,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name, email and message are required")]
    MissingContactFields,
    #[error("no plan or service selected")]
    MissingSelection,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(String),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

pub const CONFIRMATION_MESSAGE: &str = "Mensaje enviado. ¡Gracias!";

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        "Por favor, completa los campos obligatorios y/o selección de plan/servicio."
    }
}

impl SubmitError {
    /// Copy shown to the visitor. Transport failures all read the same.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Invalid(invalid) => invalid.user_message(),
            _ => "Hubo un error al enviar. Intenta de nuevo más tarde.",
        }
    }
}

pub fn validate(state: &ContactFormState) -> Result<(), ValidationError> {
    let fields = &state.fields;
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(ValidationError::MissingContactFields);
    }
    if !state.is_cart_mode()
        && (state.category.is_empty() || (state.plan.is_empty() && state.service.is_empty()))
    {
        return Err(ValidationError::MissingSelection);
    }
    Ok(())
}

/// Validates the form and builds the final line-item list.
///
/// In cart mode the cart is sent untouched and the category/plan come from its
/// first plan or service. Otherwise the base item, the selected add-ons and
/// every bonus of the resolved category are sent.
pub fn assemble(state: &ContactFormState, catalog: &Catalog) -> Result<ContactSubmission, ValidationError> {
    validate(state)?;

    let mut category = state.category.clone();
    let mut plan = state.plan.clone();

    let selected_list: Vec<CatalogItem> = if state.is_cart_mode() {
        if let Some(base) = state.cart.iter().find(|item| item.kind.is_base()) {
            category = base.category_id.primary().unwrap_or_default().to_string();
            plan = base.id.clone();
        }
        state.cart.clone()
    } else {
        let mut list = Vec::new();
        if let Some(base) = resolve_base(state, catalog) {
            category = base.category_id.primary().unwrap_or_default().to_string();
            plan = base.id.clone();
            list.push(base.clone());
        }
        list.extend(selected_addons(state, catalog).into_iter().cloned());
        list.extend(catalog.bonuses(&category).into_iter().cloned());
        list
    };

    let total = sum_prices(&selected_list);
    let fields = state.fields.clone();

    Ok(ContactSubmission {
        name: fields.name,
        email: fields.email,
        phone: fields.phone,
        company: fields.company,
        message: fields.message,
        category,
        plan,
        service: state.service.clone(),
        selected_addon_ids: state.addon_ids.clone(),
        selected_list,
        total,
    })
}

#[async_trait(?Send)]
pub trait ContactTransport {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

pub struct HttpContactTransport {
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self::new(config::contact_endpoint())
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpContactTransport {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let body = serde_json::to_string(submission)?;
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }
        Ok(())
    }
}

/// One best-effort attempt. Validation runs before anything is sent, so an
/// invalid form never reaches the transport.
pub async fn submit_contact<T>(
    state: &ContactFormState,
    catalog: &Catalog,
    transport: &T,
) -> Result<ContactSubmission, SubmitError>
where
    T: ContactTransport + ?Sized,
{
    let submission = assemble(state, catalog)?;
    match transport.deliver(&submission).await {
        Ok(()) => {
            info!(
                "Contact submission sent: {} items, total {:.2}",
                submission.selected_list.len(),
                submission.total
            );
            Ok(submission)
        }
        Err(e) => {
            error!("Contact submission failed: {}", e);
            Err(e)
        }
    }
}

/// State change that follows a submit attempt. Only a delivered submission
/// clears the form; on failure the visitor keeps everything they entered.
pub fn after_submit(result: &Result<ContactSubmission, SubmitError>) -> Option<FormAction> {
    match result {
        Ok(_) => Some(FormAction::Reset),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::catalog::{catalog, CategoryLink, ItemKind, Price};
    use crate::contact::state::Field;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<ContactSubmission>>,
        fail_with: Option<u16>,
    }

    #[async_trait(?Send)]
    impl ContactTransport for RecordingTransport {
        async fn deliver(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(submission.clone());
            match self.fail_with {
                Some(status) => Err(SubmitError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn with_contact(mut state: ContactFormState) -> ContactFormState {
        state.apply(FormAction::Edit(Field::Name, "Ana López".into()));
        state.apply(FormAction::Edit(Field::Email, "ana@example.com".into()));
        state.apply(FormAction::Edit(Field::Message, "Quiero una web".into()));
        state
    }

    fn web_basic_with_seo() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.apply(FormAction::SelectCategory("web".into()));
        state.apply(FormAction::SelectPlan("web-basic".into()));
        state.apply(FormAction::ToggleAddon("seo-audit".into()));
        with_contact(state)
    }

    fn cart() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("p1", "Plan", Price::Amount(300.0), CategoryLink::One("web".into()), ItemKind::Plan),
            CatalogItem::new("a1", "Extra", Price::Label("Incluido".into()), CategoryLink::One("web".into()), ItemKind::Addon),
        ]
    }

    #[test]
    fn manual_selection_attaches_category_bonuses() {
        let submission = assemble(&web_basic_with_seo(), catalog()).unwrap();
        let ids: Vec<&str> = submission.selected_list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["web-basic", "seo-audit", "web-hosting"]);
        assert_eq!(submission.total, 600.0);
        assert_eq!(submission.category, "web");
        assert_eq!(submission.plan, "web-basic");
    }

    #[test]
    fn standalone_service_becomes_the_plan_identifier() {
        let mut state = web_basic_with_seo();
        state.apply(FormAction::SelectService("web-landing".into()));
        let submission = assemble(&state, catalog()).unwrap();
        assert_eq!(submission.plan, "web-landing");
        assert_eq!(submission.service, "web-landing");
        assert_eq!(submission.total, 400.0);
    }

    #[test]
    fn cart_is_passed_through_unchanged() {
        let state = with_contact(ContactFormState::with_cart(cart()));
        let submission = assemble(&state, catalog()).unwrap();
        assert_eq!(submission.selected_list, cart());
        assert_eq!(submission.total, 300.0);
        assert_eq!(submission.category, "web");
        assert_eq!(submission.plan, "p1");
    }

    #[test]
    fn cart_without_base_item_keeps_form_identifiers() {
        let only_extra = cart().split_off(1);
        let state = with_contact(ContactFormState::with_cart(only_extra));
        let submission = assemble(&state, catalog()).unwrap();
        assert!(submission.category.is_empty());
        assert!(submission.plan.is_empty());
        assert_eq!(submission.total, 0.0);
    }

    #[test]
    fn empty_contact_fields_are_rejected() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut state = web_basic_with_seo();
            state.apply(FormAction::Edit(field, String::new()));
            assert_eq!(validate(&state), Err(ValidationError::MissingContactFields));
        }

        let mut state = web_basic_with_seo();
        state.apply(FormAction::Edit(Field::Phone, String::new()));
        state.apply(FormAction::Edit(Field::Company, String::new()));
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut state = web_basic_with_seo();
        state.apply(FormAction::Edit(Field::Name, " ".into()));
        state.apply(FormAction::Edit(Field::Email, "a@b".into()));
        state.apply(FormAction::Edit(Field::Message, "m".into()));
        assert_eq!(validate(&state), Ok(()));
        assert_eq!(assemble(&state, catalog()).unwrap().name, " ");
    }

    #[test]
    fn category_without_plan_or_service_is_rejected() {
        let mut state = ContactFormState::default();
        state.apply(FormAction::SelectCategory("web".into()));
        let state = with_contact(state);
        assert_eq!(validate(&state), Err(ValidationError::MissingSelection));
        assert_eq!(validate(&with_contact(ContactFormState::default())), Err(ValidationError::MissingSelection));
    }

    #[test]
    fn invalid_form_never_reaches_the_transport() {
        let transport = RecordingTransport::default();
        let mut state = web_basic_with_seo();
        state.apply(FormAction::Edit(Field::Email, String::new()));

        let result = block_on(submit_contact(&state, catalog(), &transport));
        assert!(matches!(result, Err(SubmitError::Invalid(ValidationError::MissingContactFields))));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn successful_delivery_returns_what_was_sent() {
        let transport = RecordingTransport::default();
        let state = web_basic_with_seo();

        let sent = block_on(submit_contact(&state, catalog(), &transport)).unwrap();
        assert_eq!(transport.sent.borrow().as_slice(), [sent]);
    }

    #[test]
    fn server_errors_surface_the_same_retry_message() {
        for status in [400, 500] {
            let transport = RecordingTransport { fail_with: Some(status), ..Default::default() };
            let err = block_on(submit_contact(&web_basic_with_seo(), catalog(), &transport)).unwrap_err();
            assert!(matches!(err, SubmitError::Status(s) if s == status));
            assert_eq!(err.user_message(), "Hubo un error al enviar. Intenta de nuevo más tarde.");
        }
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let submission = assemble(&web_basic_with_seo(), catalog()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["selectedAddonIds"], serde_json::json!(["seo-audit"]));
        assert_eq!(json["selectedList"][2]["price"], "Incluido");
        assert_eq!(json["total"], 600.0);
    }

    fn settle(state: &mut ContactFormState, result: &Result<ContactSubmission, SubmitError>) {
        if let Some(action) = after_submit(result) {
            state.apply(action);
        }
    }

    #[test]
    fn failed_delivery_keeps_fields_and_cart() {
        let transport = RecordingTransport { fail_with: Some(500), ..Default::default() };
        let mut state = with_contact(ContactFormState::with_cart(cart()));
        let before = state.clone();

        let result = block_on(submit_contact(&state, catalog(), &transport));
        settle(&mut state, &result);
        assert_eq!(state, before);
        assert_eq!(state.cart, cart());
        assert_eq!(state.fields.name, "Ana López");
    }

    #[test]
    fn successful_cart_submit_clears_the_form() {
        let transport = RecordingTransport::default();
        let mut state = with_contact(ContactFormState::with_cart(cart()));

        let result = block_on(submit_contact(&state, catalog(), &transport));
        settle(&mut state, &result);
        assert_eq!(transport.sent.borrow().len(), 1);
        assert!(state.cart.is_empty());
        assert_eq!(state, ContactFormState::default());
    }

    #[test]
    fn rejected_form_is_left_alone() {
        let mut state = web_basic_with_seo();
        state.apply(FormAction::Edit(Field::Message, String::new()));
        let before = state.clone();

        let result = block_on(submit_contact(&state, catalog(), &RecordingTransport::default()));
        settle(&mut state, &result);
        assert_eq!(state, before);
    }
}
