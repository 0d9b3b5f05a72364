//! Carrier endpoints and per-operation form fields.
//!
//! Every operation posts its request document form-encoded under an
//! operation-specific field name to an operation-specific path below the
//! Label Server base URL.

/// Base URL of the production Label Server.
pub const PRODUCTION_URL: &str =
    "https://labelserver.endicia.com/LabelService/EwsLabelService.asmx";

/// Base URL of the sandbox Label Server.
pub const SANDBOX_URL: &str =
    "https://elstestserver.endicia.com/LabelService/EwsLabelService.asmx";

/// The requester id shared by all sandbox accounts.
pub const SANDBOX_REQUESTER_ID: &str = "lxxx";

/// The path and form field of one Label Server operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path (and query) appended to the base URL.
    pub path: &'static str,
    /// Name of the form field carrying the request XML.
    pub form_field: &'static str,
}

/// Pass-phrase change.
pub const CHANGE_PASS_PHRASE: Endpoint = Endpoint {
    path: "/ChangePassPhraseXML?op=ChangePassPhraseXML",
    form_field: "changePassPhraseRequestXML",
};

/// Suspended-account reset.
pub const RESET_SUSPENDED_ACCOUNT: Endpoint = Endpoint {
    path: "/ResetSuspendedAccountXML?op=resetSuspendedAccountXML",
    form_field: "resetSuspendedAccountRequestXML",
};

/// Single-class postage rate.
pub const POSTAGE_RATE: Endpoint = Endpoint {
    path: "/CalculatePostageRateXML?op=CalculatePostageRateXML",
    form_field: "postageRateRequestXML",
};

/// Rate shopping across mail classes.
pub const POSTAGE_RATES: Endpoint = Endpoint {
    path: "/CalculatePostageRatesXML?op=CalculatePostageRatesXML",
    form_field: "postageRatesRequestXML",
};

/// Account recredit.
pub const RECREDIT: Endpoint = Endpoint {
    path: "/BuyPostageXML",
    form_field: "recreditRequestXML",
};

/// Label fetch.
pub const GET_POSTAGE_LABEL: Endpoint = Endpoint {
    path: "/GetPostageLabelXML",
    form_field: "labelRequestXML",
};

/// New-user signup.
pub const USER_SIGNUP: Endpoint = Endpoint {
    path: "/GetUserSignupXML",
    form_field: "userSignupRequestXML",
};
