use super::currency::Currency;
use super::error::DomainError;

/// Payee of an international transfer, with banking details.
///
/// Plain record: created and updated by user action, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: String,
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    /// SWIFT/BIC or IBAN, as entered
    pub swift_code: String,
    pub currency: Currency,
    pub country: String,
}

/// A recipient as entered in the add-recipient form, before an id is
/// assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientDraft {
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub swift_code: String,
    pub currency: Currency,
    pub country: String,
}

impl RecipientDraft {
    /// Required-field validation, mirroring the form's `required`
    /// attributes; no format checks beyond non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if self.bank_name.trim().is_empty() {
            return Err(DomainError::MissingField("bank_name"));
        }
        if self.account_number.trim().is_empty() {
            return Err(DomainError::MissingField("account_number"));
        }
        if self.swift_code.trim().is_empty() {
            return Err(DomainError::MissingField("swift_code"));
        }
        if self.country.trim().is_empty() {
            return Err(DomainError::MissingField("country"));
        }
        Ok(())
    }

    /// Attach an assigned id, producing the stored record
    pub fn into_recipient(self, id: String) -> Recipient {
        Recipient {
            id,
            name: self.name,
            bank_name: self.bank_name,
            account_number: self.account_number,
            swift_code: self.swift_code,
            currency: self.currency,
            country: self.country,
        }
    }
}
