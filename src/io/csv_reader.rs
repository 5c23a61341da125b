use std::io::Read;

use serde::Deserialize;

use super::error::IoError;
use crate::domain::{Currency, RecipientDraft};

/// Raw CSV row for a bulk recipient upload, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipientRecord {
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub swift_code: String,
    pub currency: String,
    pub country: String,
}

impl RawRecipientRecord {
    /// Parse this raw record into a validated draft
    pub fn parse(self) -> Result<RecipientDraft, IoError> {
        let currency: Currency = self
            .currency
            .parse()
            .map_err(|_| IoError::InvalidCurrency(self.currency.clone()))?;

        let draft = RecipientDraft {
            name: self.name,
            bank_name: self.bank_name,
            account_number: self.account_number,
            swift_code: self.swift_code,
            currency,
            country: self.country,
        };
        draft.validate()?;

        Ok(draft)
    }
}

/// Read a recipient upload CSV into validated drafts.
///
/// Fails on the first bad row: a partial bulk upload would leave the
/// registry in a state the uploader cannot see.
pub fn read_recipients<R: Read>(reader: R) -> Result<Vec<RecipientDraft>, IoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut drafts = Vec::new();

    for row in csv_reader.deserialize::<RawRecipientRecord>() {
        drafts.push(row?.parse()?);
    }

    Ok(drafts)
}
