//! New-account signup request.

use crate::credential::CertifiedIntermediary;
use crate::request::RequestHeader;

/// Signs a new customer up for a postage account.
///
/// Carries the customer's contact details and the billing type; when
/// `token_requested` is set the carrier returns a security token for the
/// new account in place of a pass phrase. The carrier currently accepts
/// only the `TS` billing type.
#[derive(Debug, Clone)]
pub struct UserSignupRequest {
    pub(crate) header: RequestHeader,
    token_requested: bool,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    title: Option<String>,
    email_address: String,
    phone_number: String,
    phone_number_ext: Option<String>,
    fax_number: Option<String>,
    billing_type: String,
    payment_details_deferred: bool,
}

impl UserSignupRequest {
    /// Creates a signup request with the required contact fields.
    #[must_use]
    pub fn new(
        requester_id: impl Into<String>,
        credential: CertifiedIntermediary,
        token_requested: bool,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            header: RequestHeader::new(requester_id, credential),
            token_requested,
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            title: None,
            email_address: email_address.into(),
            phone_number: phone_number.into(),
            phone_number_ext: None,
            fax_number: None,
            billing_type: "TS".to_owned(),
            payment_details_deferred: false,
        }
    }

    /// Sets whether the response should include a security token.
    pub fn set_token_requested(&mut self, token_requested: bool) {
        self.token_requested = token_requested;
    }

    /// True when a security token is requested in the response.
    #[must_use]
    pub fn token_requested(&self) -> bool {
        self.token_requested
    }

    /// Returns the customer's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Sets the customer's middle name.
    pub fn set_middle_name(&mut self, middle_name: Option<String>) {
        self.middle_name = middle_name;
    }

    /// Returns the customer's middle name.
    #[must_use]
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    /// Returns the customer's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Sets the customer's title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Returns the customer's title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the customer's email address.
    #[must_use]
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Returns the customer's phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Sets the customer's phone extension.
    pub fn set_phone_number_ext(&mut self, ext: Option<String>) {
        self.phone_number_ext = ext;
    }

    /// Returns the customer's phone extension.
    #[must_use]
    pub fn phone_number_ext(&self) -> Option<&str> {
        self.phone_number_ext.as_deref()
    }

    /// Sets the customer's fax number.
    pub fn set_fax_number(&mut self, fax: Option<String>) {
        self.fax_number = fax;
    }

    /// Returns the customer's fax number.
    #[must_use]
    pub fn fax_number(&self) -> Option<&str> {
        self.fax_number.as_deref()
    }

    /// Returns the billing type.
    #[must_use]
    pub fn billing_type(&self) -> &str {
        &self.billing_type
    }

    /// Sets whether billing is deferred; a deferred account can only see
    /// rates, not print labels or postage.
    pub fn set_payment_details_deferred(&mut self, deferred: bool) {
        self.payment_details_deferred = deferred;
    }

    /// True when billing is deferred.
    #[must_use]
    pub fn payment_details_deferred(&self) -> bool {
        self.payment_details_deferred
    }
}
