//! Postal addresses with jurisdiction-dependent validation.

use serde::{Deserialize, Serialize};

use crate::country;
use crate::error::{Error, Result};

/// Maximum length of the name, company, and address line fields.
const MAX_LINE_LEN: usize = 47;

/// Maximum length of the city field.
const MAX_CITY_LEN: usize = 50;

/// Maximum length of an international postal code.
const MAX_INTL_POSTAL_CODE_LEN: usize = 10;

/// Maximum digits in an international phone number.
const MAX_INTL_PHONE_LEN: usize = 30;

/// Maximum length of the email field.
const MAX_EMAIL_LEN: usize = 64;

/// A validation rule for the state field, selected by country code.
type StateRule = fn(&str) -> Result<()>;

/// Countries whose state field is checked against a fixed code list.
/// Everything else accepts any non-empty value.
const STATE_RULES: &[(&str, StateRule)] = &[
    ("US", validate_us_state),
    ("CA", validate_canada_province),
    ("AU", validate_australia_territory),
];

fn validate_us_state(state: &str) -> Result<()> {
    if country::US_STATE_CODES.contains(&state) {
        Ok(())
    } else {
        Err(Error::invalid(
            "Please provide the state as the accepted two letter code for US addresses.",
        ))
    }
}

fn validate_canada_province(state: &str) -> Result<()> {
    if country::CANADA_PROVINCE_CODES.contains(&state) {
        Ok(())
    } else {
        Err(Error::invalid(
            "Please provide the province as the accepted two letter code for Canadian addresses.",
        ))
    }
}

fn validate_australia_territory(state: &str) -> Result<()> {
    if country::AUSTRALIA_TERRITORY_CODES.contains(&state) {
        Ok(())
    } else {
        Err(Error::invalid(
            "Please provide the territory as the accepted two/three letter code for Australian addresses.",
        ))
    }
}

/// A validated postal address.
///
/// Either a name or a company is required; both are capped at 47
/// characters. The state, postal code, and phone rules branch on the
/// country, so the country is always validated and resolved first, both at
/// construction and when mutated. Every setter re-validates its field, so
/// no partially invalid address is ever observable.
///
/// Country input accepts a two-letter ISO 3166 code or a recognized
/// name/alias ("USA", "Great Britain", ...); the stored value is always the
/// canonical two-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    name: Option<String>,
    company: Option<String>,
    address_line1: String,
    address_line2: Option<String>,
    address_line3: Option<String>,
    address_line4: Option<String>,
    city: String,
    state: String,
    postal_code: String,
    delivery_point: Option<String>,
    country: String,
    phone: Option<String>,
    email: Option<String>,
}

impl Address {
    /// Creates a new address, validating every field.
    ///
    /// The country is applied first since the state, postal code, and phone
    /// rules depend on it; the name is applied before the company, so a
    /// missing name is only acceptable when a company follows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] describing the first field that
    /// fails validation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        company: Option<String>,
        address_line1: String,
        address_line2: Option<String>,
        address_line3: Option<String>,
        address_line4: Option<String>,
        city: String,
        state: String,
        postal_code: String,
        delivery_point: Option<String>,
        country: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Self> {
        let mut address = Self {
            name: None,
            company: None,
            address_line1: String::new(),
            address_line2: None,
            address_line3: None,
            address_line4: None,
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            delivery_point: None,
            country: String::new(),
            phone: None,
            email: None,
        };

        address.set_country(&country)?;
        // Setting an absent name would fail while company is still unset,
        // so it is skipped here; set_company then enforces that at least
        // one of the two is present.
        if let Some(name) = none_if_empty(name) {
            address.set_name(Some(name))?;
        }
        address.set_company(company)?;
        address.set_address_line1(address_line1)?;
        address.set_address_line2(address_line2)?;
        address.set_address_line3(address_line3)?;
        address.set_address_line4(address_line4)?;
        address.set_city(&city)?;
        address.set_state(&state)?;
        address.set_postal_code(&postal_code)?;
        address.set_delivery_point(delivery_point)?;
        address.set_phone(phone)?;
        address.set_email(email)?;

        Ok(address)
    }

    /// Sets the recipient name. Required unless a company is set; at most
    /// 47 characters.
    pub fn set_name(&mut self, name: Option<String>) -> Result<()> {
        let name = none_if_empty(name);
        if name.is_none() && self.company.is_none() {
            return Err(Error::invalid(
                "The name must be provided unless the company is provided",
            ));
        }
        if let Some(ref name) = name {
            if name.len() > MAX_LINE_LEN {
                return Err(Error::invalid(
                    "The name must not be longer than 47 characters",
                ));
            }
        }
        self.name = name;
        Ok(())
    }

    /// Returns the recipient name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the company. Required unless a name is set; at most 47
    /// characters.
    pub fn set_company(&mut self, company: Option<String>) -> Result<()> {
        let company = none_if_empty(company);
        if company.is_none() && self.name.is_none() {
            return Err(Error::invalid(
                "The company must be provided unless name is provided",
            ));
        }
        if let Some(ref company) = company {
            if company.len() > MAX_LINE_LEN {
                return Err(Error::invalid(
                    "The company name must not be longer than 47 characters",
                ));
            }
        }
        self.company = company;
        Ok(())
    }

    /// Returns the company.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Sets the first address line. May be empty only when a company is
    /// set (the rule reads the company, not the name); at most 47
    /// characters.
    pub fn set_address_line1(&mut self, line: impl Into<String>) -> Result<()> {
        let line = line.into();
        if line.is_empty() && self.company.is_none() {
            return Err(Error::invalid(
                "The address line 1 must be provided unless the company is provided",
            ));
        }
        if line.len() > MAX_LINE_LEN {
            return Err(Error::invalid(
                "The address line 1 must not be longer than 47 characters",
            ));
        }
        self.address_line1 = line;
        Ok(())
    }

    /// Returns the first address line.
    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    /// Sets the second address line; at most 47 characters.
    pub fn set_address_line2(&mut self, line: Option<String>) -> Result<()> {
        self.address_line2 = validate_optional_line(line, 2)?;
        Ok(())
    }

    /// Returns the second address line.
    #[must_use]
    pub fn address_line2(&self) -> Option<&str> {
        self.address_line2.as_deref()
    }

    /// Sets the third address line; at most 47 characters.
    pub fn set_address_line3(&mut self, line: Option<String>) -> Result<()> {
        self.address_line3 = validate_optional_line(line, 3)?;
        Ok(())
    }

    /// Returns the third address line.
    #[must_use]
    pub fn address_line3(&self) -> Option<&str> {
        self.address_line3.as_deref()
    }

    /// Sets the fourth address line; at most 47 characters.
    pub fn set_address_line4(&mut self, line: Option<String>) -> Result<()> {
        self.address_line4 = validate_optional_line(line, 4)?;
        Ok(())
    }

    /// Returns the fourth address line.
    #[must_use]
    pub fn address_line4(&self) -> Option<&str> {
        self.address_line4.as_deref()
    }

    /// Sets the city: required, at most 50 characters, letters, spaces,
    /// periods and hyphens only.
    pub fn set_city(&mut self, city: &str) -> Result<()> {
        let valid_chars = city
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '.' || c == ' ');
        if city.is_empty() || city.len() > MAX_CITY_LEN || !valid_chars {
            return Err(Error::invalid(
                "The city must not be longer than 50 characters, and contain only a-z, A-Z, space, period and hyphen characters.",
            ));
        }
        self.city = city.to_owned();
        Ok(())
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Sets the state or province.
    ///
    /// US, Canadian, and Australian addresses are checked against the
    /// respective fixed subdivision-code lists; other countries accept any
    /// non-empty value.
    pub fn set_state(&mut self, state: &str) -> Result<()> {
        if state.is_empty() {
            return Err(Error::invalid("The state or province is required."));
        }
        if let Some((_, rule)) = STATE_RULES.iter().find(|(code, _)| *code == self.country) {
            rule(state)?;
        }
        self.state = state.to_owned();
        Ok(())
    }

    /// Returns the state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Sets the postal code.
    ///
    /// US addresses require a 5-digit ZIP or ZIP+4; other countries accept
    /// up to 10 characters.
    pub fn set_postal_code(&mut self, postal_code: &str) -> Result<()> {
        if postal_code.is_empty() {
            return Err(Error::invalid("The postal code must be provided."));
        }
        if self.country == "US" {
            if !is_us_zip(postal_code) {
                return Err(Error::invalid(
                    "The postal code must be either a 5 digit zip code or a 10 digit (including hyphen) zip+4 for US addresses.",
                ));
            }
        } else if postal_code.len() > MAX_INTL_POSTAL_CODE_LEN {
            return Err(Error::invalid(
                "The postal code must not be longer than 10 characters.",
            ));
        }
        self.postal_code = postal_code.to_owned();
        Ok(())
    }

    /// Returns the postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Sets the delivery point: optional, exactly 2 characters if present.
    pub fn set_delivery_point(&mut self, delivery_point: Option<String>) -> Result<()> {
        let delivery_point = none_if_empty(delivery_point);
        if let Some(ref dp) = delivery_point {
            if dp.len() != 2 {
                return Err(Error::invalid(
                    "The delivery point must be exactly 2 characters",
                ));
            }
        }
        self.delivery_point = delivery_point;
        Ok(())
    }

    /// Returns the delivery point.
    #[must_use]
    pub fn delivery_point(&self) -> Option<&str> {
        self.delivery_point.as_deref()
    }

    /// Sets the country from a two-letter code or a recognized name/alias.
    /// The stored value is the canonical two-letter code.
    pub fn set_country(&mut self, country: &str) -> Result<()> {
        if country.is_empty() {
            return Err(Error::invalid("The country is required"));
        }
        match country::resolve(country) {
            Some(code) => {
                self.country = code.to_owned();
                Ok(())
            }
            None => Err(Error::invalid(
                "The country must be an ISO 3166 two letter country code, a country short name, or a common vulgar country name e.g. USA for United States",
            )),
        }
    }

    /// Returns the canonical two-letter country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Sets the phone number.
    ///
    /// US addresses require exactly 10 digits; international addresses
    /// accept up to 30 digits.
    pub fn set_phone(&mut self, phone: Option<String>) -> Result<()> {
        let phone = none_if_empty(phone);
        if let Some(ref phone) = phone {
            if self.country == "US" {
                if phone.len() != 10 {
                    return Err(Error::invalid(
                        "The phone number associated with a domestic (US) address must be exactly 10 characters long.",
                    ));
                }
                if !phone.chars().all(|c| c.is_ascii_digit()) {
                    return Err(Error::invalid(
                        "The phone number associated with a domestic (US) address must contain only digits.",
                    ));
                }
            } else if phone.len() > MAX_INTL_PHONE_LEN
                || !phone.chars().all(|c| c.is_ascii_digit())
            {
                // Known wording bug: the enforced bound is 30 digits, not
                // the 10 the message claims.
                return Err(Error::invalid(
                    "The phone number associated with an international address must not contain characters other than digits and must be exactly 10 characters long.",
                ));
            }
        }
        self.phone = phone;
        Ok(())
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Sets the email address: optional, at most 64 characters.
    pub fn set_email(&mut self, email: Option<String>) -> Result<()> {
        let email = none_if_empty(email);
        if let Some(ref email) = email {
            if email.len() > MAX_EMAIL_LEN {
                return Err(Error::invalid(
                    "The email address must not be longer than 64 characters",
                ));
            }
        }
        self.email = email;
        Ok(())
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Treat an empty string the same as an absent value.
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate_optional_line(line: Option<String>, number: u8) -> Result<Option<String>> {
    let line = none_if_empty(line);
    if let Some(ref line) = line {
        if line.len() > MAX_LINE_LEN {
            return Err(Error::invalid(format!(
                "The address line {number} must not be longer than 47 characters"
            )));
        }
    }
    Ok(line)
}

/// `\d{5}` or `\d{5}-\d{4}`.
fn is_us_zip(postal_code: &str) -> bool {
    let bytes = postal_code.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_address() -> Address {
        Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "123 Main St".to_owned(),
            None,
            None,
            None,
            "Portland".to_owned(),
            "OR".to_owned(),
            "97201".to_owned(),
            None,
            "US".to_owned(),
            None,
            None,
        )
        .expect("valid address")
    }

    #[test]
    fn test_should_construct_valid_us_address() {
        let address = us_address();
        assert_eq!(address.country(), "US");
        assert_eq!(address.state(), "OR");
        assert_eq!(address.postal_code(), "97201");
    }

    #[test]
    fn test_should_accept_47_character_name() {
        let mut address = us_address();
        assert!(address.set_name(Some("n".repeat(47))).is_ok());
    }

    #[test]
    fn test_should_reject_48_character_name() {
        let mut address = us_address();
        let err = address.set_name(Some("n".repeat(48))).unwrap_err();
        assert!(err.to_string().contains("47 characters"));
    }

    #[test]
    fn test_should_require_name_or_company() {
        let result = Address::new(
            None,
            None,
            "123 Main St".to_owned(),
            None,
            None,
            None,
            "Portland".to_owned(),
            "OR".to_owned(),
            "97201".to_owned(),
            None,
            "US".to_owned(),
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_should_allow_company_without_name() {
        let result = Address::new(
            None,
            Some("Acme Corp".to_owned()),
            "123 Main St".to_owned(),
            None,
            None,
            None,
            "Portland".to_owned(),
            "OR".to_owned(),
            "97201".to_owned(),
            None,
            "US".to_owned(),
            None,
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_should_couple_empty_line1_to_company_presence() {
        let mut with_company = Address::new(
            None,
            Some("Acme Corp".to_owned()),
            "123 Main St".to_owned(),
            None,
            None,
            None,
            "Portland".to_owned(),
            "OR".to_owned(),
            "97201".to_owned(),
            None,
            "US".to_owned(),
            None,
            None,
        )
        .expect("valid");
        assert!(with_company.set_address_line1("").is_ok());

        let mut without_company = us_address();
        assert!(without_company.set_address_line1("").is_err());
    }

    #[test]
    fn test_should_reject_city_with_invalid_characters() {
        let mut address = us_address();
        assert!(address.set_city("St. Louis").is_ok());
        assert!(address.set_city("Winston-Salem").is_ok());
        assert!(address.set_city("Springfield 4").is_err());
        assert!(address.set_city("").is_err());
    }

    #[test]
    fn test_should_validate_us_state_codes() {
        let mut address = us_address();
        assert!(address.set_state("NY").is_ok());
        assert!(address.set_state("ZZ").is_err());
    }

    #[test]
    fn test_should_accept_freeform_state_for_other_countries() {
        let address = Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "10 Downing Street".to_owned(),
            None,
            None,
            None,
            "London".to_owned(),
            "Greater London".to_owned(),
            "SW1A 2AA".to_owned(),
            None,
            "GB".to_owned(),
            None,
            None,
        );
        assert!(address.is_ok());
    }

    #[test]
    fn test_should_validate_canadian_provinces() {
        let result = Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "24 Sussex Drive".to_owned(),
            None,
            None,
            None,
            "Ottawa".to_owned(),
            "ON".to_owned(),
            "K1M 1M4".to_owned(),
            None,
            "CA".to_owned(),
            None,
            None,
        );
        assert!(result.is_ok());

        let bad = Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "24 Sussex Drive".to_owned(),
            None,
            None,
            None,
            "Ottawa".to_owned(),
            "XX".to_owned(),
            "K1M 1M4".to_owned(),
            None,
            "CA".to_owned(),
            None,
            None,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_should_validate_us_postal_codes() {
        let mut address = us_address();
        assert!(address.set_postal_code("97201").is_ok());
        assert!(address.set_postal_code("97201-1234").is_ok());
        assert!(address.set_postal_code("9720").is_err());
        assert!(address.set_postal_code("97201-12345").is_err());
        assert!(address.set_postal_code("ABCDE").is_err());
    }

    #[test]
    fn test_should_resolve_country_aliases() {
        for input in ["USA", "United States", "United States of America"] {
            let address = Address::new(
                Some("Jane Doe".to_owned()),
                None,
                "123 Main St".to_owned(),
                None,
                None,
                None,
                "Portland".to_owned(),
                "OR".to_owned(),
                "97201".to_owned(),
                None,
                input.to_owned(),
                None,
                None,
            )
            .expect("alias resolves");
            assert_eq!(address.country(), "US");
        }
    }

    #[test]
    fn test_should_reject_unknown_country() {
        let mut address = us_address();
        assert!(address.set_country("XX").is_err());
    }

    #[test]
    fn test_should_validate_us_phone() {
        let mut address = us_address();
        assert!(address.set_phone(Some("5035551234".to_owned())).is_ok());
        assert!(address.set_phone(Some("503555123".to_owned())).is_err());
        assert!(address.set_phone(Some("503555123a".to_owned())).is_err());
        assert!(address.set_phone(None).is_ok());
    }

    #[test]
    fn test_should_cap_international_phone_at_30_digits() {
        let mut address = Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "10 Downing Street".to_owned(),
            None,
            None,
            None,
            "London".to_owned(),
            "Greater London".to_owned(),
            "SW1A 2AA".to_owned(),
            None,
            "GB".to_owned(),
            None,
            None,
        )
        .expect("valid");
        assert!(address.set_phone(Some("4".repeat(30))).is_ok());
        assert!(address.set_phone(Some("4".repeat(31))).is_err());
    }

    #[test]
    fn test_should_require_two_character_delivery_point() {
        let mut address = us_address();
        assert!(address.set_delivery_point(Some("01".to_owned())).is_ok());
        assert!(address.set_delivery_point(Some("012".to_owned())).is_err());
        assert!(address.set_delivery_point(None).is_ok());
    }

    #[test]
    fn test_should_cap_email_at_64_characters() {
        let mut address = us_address();
        assert!(address.set_email(Some("e".repeat(64))).is_ok());
        assert!(address.set_email(Some("e".repeat(65))).is_err());
    }
}
