//! HTTP transport for the MailStack Label Server client.
//!
//! [`Client`] posts serialized request documents as form-encoded bodies to
//! the carrier's endpoints and feeds the raw response body to the matching
//! parser in `mailstack-xml`. The client performs exactly one round trip
//! per call: no retries, no timeouts beyond the HTTP client's own, and no
//! response caching.
//!
//! In [`Mode::Sandbox`] every request's requester id is replaced with the
//! shared sandbox requester id before serialization, matching the carrier's
//! sandbox convention.

pub mod endpoint;

use mailstack_model::request::{
    ChangePassPhraseRequest, GetPostageLabelRequest, LabelRequest, PostageRateRequest,
    PostageRatesRequest, RecreditRequest, ResetSuspendedAccountRequest, UserSignupRequest,
};
use mailstack_model::response::{
    ChangePassPhraseRequestResponse, LabelRequestResponse, PostageRateRequestResponse,
    PostageRatesRequestResponse, RecreditRequestResponse, ResetSuspendedAccountResponse,
    UserSignupRequestResponse,
};
use mailstack_xml::{FromResponseXml, LabelXmlSerialize, XmlError, to_xml};

use crate::endpoint::Endpoint;

/// Errors from a Label Server round trip.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request failed or returned a non-success status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serializing the request or parsing the response failed.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Which Label Server the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The production Label Server.
    #[default]
    Production,
    /// The carrier's test Label Server.
    Sandbox,
}

impl Mode {
    /// Returns the base URL for this mode.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => endpoint::PRODUCTION_URL,
            Self::Sandbox => endpoint::SANDBOX_URL,
        }
    }
}

/// Label Server API client.
#[derive(Debug, Clone)]
pub struct Client {
    mode: Mode,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the given mode with a default HTTP client.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self::with_http_client(mode, reqwest::Client::new())
    }

    /// Creates a client with a caller-supplied HTTP client, for custom
    /// timeouts, proxies, and the like.
    #[must_use]
    pub fn with_http_client(mode: Mode, http: reqwest::Client) -> Self {
        Self { mode, http }
    }

    /// Returns the client's mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True when talking to the sandbox Label Server.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.mode == Mode::Sandbox
    }

    /// Changes an account's pass phrase, optionally requesting a security
    /// token usable in place of the credentials on later requests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn change_pass_phrase(
        &self,
        request: &mut ChangePassPhraseRequest,
    ) -> Result<ChangePassPhraseRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::CHANGE_PASS_PHRASE, &*request)
            .await
    }

    /// Requests a postage rate for one mail class.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn postage_rate(
        &self,
        request: &mut PostageRateRequest,
    ) -> Result<PostageRateRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::POSTAGE_RATE, &*request).await
    }

    /// Requests rates for every eligible mail class at once.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn postage_rates(
        &self,
        request: &mut PostageRatesRequest,
    ) -> Result<PostageRatesRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::POSTAGE_RATES, &*request).await
    }

    /// Adds funds to a postage account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn recredit(
        &self,
        request: &mut RecreditRequest,
    ) -> Result<RecreditRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::RECREDIT, &*request).await
    }

    /// Fetches a printable postage label with label-type options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn get_postage_label(
        &self,
        request: &mut GetPostageLabelRequest,
    ) -> Result<LabelRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::GET_POSTAGE_LABEL, &*request).await
    }

    /// Fetches a printable postage label for a domestic mail class.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn print_label(
        &self,
        request: &mut LabelRequest,
    ) -> Result<LabelRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::GET_POSTAGE_LABEL, &*request).await
    }

    /// Resets a suspended account via its challenge answer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn reset_suspended_account(
        &self,
        request: &mut ResetSuspendedAccountRequest,
    ) -> Result<ResetSuspendedAccountResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::RESET_SUSPENDED_ACCOUNT, &*request)
            .await
    }

    /// Signs a new customer up for a postage account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an unparseable
    /// response.
    pub async fn user_signup(
        &self,
        request: &mut UserSignupRequest,
    ) -> Result<UserSignupRequestResponse, ClientError> {
        if self.is_sandbox() {
            request.set_requester_id(endpoint::SANDBOX_REQUESTER_ID);
        }
        self.round_trip(endpoint::USER_SIGNUP, &*request).await
    }

    /// Serialize, post, and parse one operation.
    async fn round_trip<Req, Resp>(
        &self,
        endpoint: Endpoint,
        request: &Req,
    ) -> Result<Resp, ClientError>
    where
        Req: LabelXmlSerialize,
        Resp: FromResponseXml,
    {
        let xml = to_xml(request)?;
        let body = self.post_form(endpoint, &xml).await?;
        Ok(Resp::from_response_xml(&body)?)
    }

    /// Post the request XML form-encoded and return the raw response body.
    async fn post_form(&self, endpoint: Endpoint, xml: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.mode.base_url(), endpoint.path);
        tracing::debug!(%url, field = endpoint.form_field, "posting request XML");

        let response = self
            .http
            .post(&url)
            .form(&[(endpoint.form_field, xml)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        tracing::trace!(bytes = body.len(), "received response body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_select_base_url_by_mode() {
        assert!(Mode::Production.base_url().contains("labelserver"));
        assert!(Mode::Sandbox.base_url().contains("elstestserver"));
        assert!(Client::new(Mode::Sandbox).is_sandbox());
        assert!(!Client::new(Mode::Production).is_sandbox());
    }

    #[test]
    fn test_should_map_operations_to_form_fields() {
        assert_eq!(
            endpoint::CHANGE_PASS_PHRASE.form_field,
            "changePassPhraseRequestXML"
        );
        assert_eq!(endpoint::RECREDIT.form_field, "recreditRequestXML");
        assert_eq!(endpoint::POSTAGE_RATE.form_field, "postageRateRequestXML");
        assert_eq!(endpoint::GET_POSTAGE_LABEL.form_field, "labelRequestXML");
        assert_eq!(
            endpoint::RESET_SUSPENDED_ACCOUNT.form_field,
            "resetSuspendedAccountRequestXML"
        );
    }

    #[test]
    fn test_should_keep_recredit_path_without_op_query() {
        assert_eq!(endpoint::RECREDIT.path, "/BuyPostageXML");
        assert_eq!(endpoint::GET_POSTAGE_LABEL.path, "/GetPostageLabelXML");
    }
}
