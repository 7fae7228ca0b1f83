//! The external form relay.
//!
//! Registrations are not processed by this app. The form is posted to a
//! third-party relay service that forwards it by email and then sends
//! the visitor back to the contact screen with a success marker. This
//! module builds that payload, including the relay's control fields,
//! and hides the delivery behind a capability so the rest of the app
//! (and the tests) never touch a network.

use crate::config::SiteConfig;
use crate::router::{self, Route};

/// The visitor-entered registration fields, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub city: String,
}

impl FormFields {
    /// Every field is required before submission is enabled.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.business_type.is_empty()
            && !self.city.trim().is_empty()
    }
}

/// A ready-to-post submission: the relay endpoint plus every field,
/// visitor-entered and hidden control fields alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub endpoint: String,
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    /// Assemble the payload in the shape the relay expects: the
    /// visitor fields first, then the relay control fields. `_next` is
    /// the page the relay redirects to afterwards: the submitting route
    /// with the success marker appended.
    pub fn new(config: &SiteConfig, fields: &FormFields, current: Route) -> Self {
        let fields = vec![
            ("name".to_string(), fields.name.trim().to_string()),
            ("email".to_string(), fields.email.trim().to_string()),
            ("phone".to_string(), fields.phone.trim().to_string()),
            ("business-type".to_string(), fields.business_type.clone()),
            ("city".to_string(), fields.city.trim().to_string()),
            ("_subject".to_string(), config.form_subject.clone()),
            ("_template".to_string(), "table".to_string()),
            ("_captcha".to_string(), "false".to_string()),
            ("_next".to_string(), router::with_success(current)),
        ];

        FormPayload { endpoint: config.relay_endpoint.clone(), fields }
    }

    /// Where the relay sends the visitor after accepting the post.
    pub fn redirect(&self) -> &str {
        self.fields
            .iter()
            .find(|(key, _)| key == "_next")
            .map(|(_, value)| value.as_str())
            .expect("payload always carries a _next field")
    }
}

/// Delivery capability. The production implementation hands the post
/// off and reports where the visitor lands next; fakes stand in for it
/// in tests.
pub trait FormRelay {
    /// Deliver the payload and return the redirect location.
    fn deliver(&self, payload: &FormPayload) -> String;
}

/// Default relay: the post itself is the external service's business,
/// so this logs the submission and resolves the redirect the service
/// would perform.
#[derive(Debug, Default)]
pub struct ExternalRelay;

impl FormRelay for ExternalRelay {
    fn deliver(&self, payload: &FormPayload) -> String {
        log::info!(
            "submitting registration to {} ({} fields)",
            payload.endpoint,
            payload.fields.len()
        );
        payload.redirect().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> FormFields {
        FormFields {
            name: "Asha Kulkarni".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            business_type: "handicrafts".to_string(),
            city: "Hubballi".to_string(),
        }
    }

    #[test]
    fn test_incomplete_fields() {
        assert!(!FormFields::default().is_complete());

        let mut fields = sample_fields();
        assert!(fields.is_complete());

        fields.city = "   ".to_string();
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_payload_carries_relay_control_fields() {
        let payload = FormPayload::new(&SiteConfig::default(), &sample_fields(), Route::Contact);

        let get = |key: &str| {
            payload
                .fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("_template"), Some("table"));
        assert_eq!(get("_captcha"), Some("false"));
        assert_eq!(get("_subject"), Some("New WEDA Registration"));
        assert_eq!(get("_next"), Some("/contact?success=true"));
        assert_eq!(get("name"), Some("Asha Kulkarni"));
    }

    #[test]
    fn test_redirect_points_back_with_success() {
        let payload = FormPayload::new(&SiteConfig::default(), &sample_fields(), Route::Contact);
        assert_eq!(payload.redirect(), "/contact?success=true");

        let location = router::parse(payload.redirect());
        assert_eq!(location.route, Route::Contact);
        assert!(location.success);
    }

    #[test]
    fn test_external_relay_resolves_redirect() {
        let payload = FormPayload::new(&SiteConfig::default(), &sample_fields(), Route::Contact);
        assert_eq!(ExternalRelay.deliver(&payload), "/contact?success=true");
    }
}
