use tracing::debug;

use super::back_office::BackOffice;
use super::error::EngineError;
use crate::domain::{
    AmountType, Currency, RemittanceTransaction, TransferQuote, TransferStatus,
};

/// The three screens of the send-money flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Amount,
    Review,
    Confirm,
}

/// Linear state machine for the send-money flow: Amount -> Review ->
/// Confirm, with back-navigation to the immediately prior step only.
///
/// Form fields are editable in the Amount step and each edit recomputes
/// the quote synchronously. `send` is only legal in Confirm; it appends
/// exactly one `Pending` transaction and resets the wizard. Dropping the
/// wizard at any point has no side effects.
#[derive(Debug, Clone)]
pub struct TransferWizard<A: AmountType> {
    step: WizardStep,
    send_amount: Option<A>,
    send_currency: Currency,
    recipient_id: Option<String>,
    quote: Option<TransferQuote<A>>,
}

impl<A: AmountType> TransferWizard<A> {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Amount,
            send_amount: None,
            send_currency: Currency::Usd,
            recipient_id: None,
            quote: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn send_amount(&self) -> Option<A> {
        self.send_amount
    }

    pub fn send_currency(&self) -> Currency {
        self.send_currency
    }

    pub fn recipient_id(&self) -> Option<&str> {
        self.recipient_id.as_deref()
    }

    /// The quote derived from the current fields, if they are complete
    pub fn quote(&self) -> Option<TransferQuote<A>> {
        self.quote
    }

    /// Enter a send amount (Amount step only)
    pub fn set_amount(
        &mut self,
        desk: &BackOffice<A>,
        amount: A,
    ) -> Result<(), EngineError> {
        self.ensure_step(WizardStep::Amount, "set_amount")?;

        self.send_amount = Some(amount);
        self.refresh_quote(desk)
    }

    /// Change the source currency (Amount step only)
    pub fn set_currency(
        &mut self,
        desk: &BackOffice<A>,
        currency: Currency,
    ) -> Result<(), EngineError> {
        self.ensure_step(WizardStep::Amount, "set_currency")?;

        self.send_currency = currency;
        self.refresh_quote(desk)
    }

    /// Pick the payout recipient (Amount step only)
    pub fn select_recipient(
        &mut self,
        desk: &BackOffice<A>,
        recipient_id: &str,
    ) -> Result<(), EngineError> {
        self.ensure_step(WizardStep::Amount, "select_recipient")?;

        if desk.recipient(recipient_id).is_none() {
            return Err(EngineError::RecipientNotFound(recipient_id.to_string()));
        }

        self.recipient_id = Some(recipient_id.to_string());
        self.refresh_quote(desk)
    }

    /// Advance one step. Leaving Amount requires a positive amount and a
    /// selected recipient.
    pub fn next(&mut self, desk: &BackOffice<A>) -> Result<WizardStep, EngineError> {
        self.step = match self.step {
            WizardStep::Amount => {
                let amount = self
                    .send_amount
                    .ok_or(EngineError::IncompleteTransfer("no amount entered"))?;
                if !amount.is_positive() {
                    return Err(EngineError::IncompleteTransfer("amount must be positive"));
                }
                if self.recipient_id.is_none() {
                    return Err(EngineError::IncompleteTransfer("no recipient selected"));
                }

                // The review screen shows whatever the quote currently is,
                // zeroed pairs included
                self.refresh_quote(desk)?;
                WizardStep::Review
            }
            WizardStep::Review => WizardStep::Confirm,
            WizardStep::Confirm => {
                return Err(EngineError::WizardStepViolation {
                    step: self.step,
                    action: "next",
                });
            }
        };

        debug!(step = ?self.step, "Wizard advanced");
        Ok(self.step)
    }

    /// Step back to the immediately prior screen
    pub fn back(&mut self) -> Result<WizardStep, EngineError> {
        self.step = match self.step {
            WizardStep::Amount => {
                return Err(EngineError::WizardStepViolation {
                    step: self.step,
                    action: "back",
                });
            }
            WizardStep::Review => WizardStep::Amount,
            WizardStep::Confirm => WizardStep::Review,
        };

        debug!(step = ?self.step, "Wizard stepped back");
        Ok(self.step)
    }

    /// Terminal action: package the computed transfer, append it to the
    /// history with status `Pending`, and reset to a cleared Amount step.
    pub fn send(
        &mut self,
        desk: &mut BackOffice<A>,
    ) -> Result<RemittanceTransaction<A>, EngineError> {
        self.ensure_step(WizardStep::Confirm, "send")?;

        let send_amount = self
            .send_amount
            .ok_or(EngineError::IncompleteTransfer("no amount entered"))?;
        let recipient_id = self
            .recipient_id
            .clone()
            .ok_or(EngineError::IncompleteTransfer("no recipient selected"))?;
        let recipient = desk
            .recipient(&recipient_id)
            .ok_or_else(|| EngineError::RecipientNotFound(recipient_id.clone()))?;
        let quote = self
            .quote
            .ok_or(EngineError::IncompleteTransfer("no quote computed"))?;

        let tx = RemittanceTransaction {
            id: desk.next_transaction_id(),
            recipient_id,
            send_amount,
            send_currency: self.send_currency,
            receive_amount: quote.receive_amount,
            receive_currency: recipient.currency,
            exchange_rate: quote.exchange_rate,
            fees: quote.fees,
            total_cost: quote.total_cost,
            status: TransferStatus::Pending,
            tracking_number: desk.next_tracking_number(),
            date: desk.current_date().to_string(),
        };

        desk.append_transaction(tx.clone());
        debug!(id = %tx.id, tracking = %tx.tracking_number, "Transfer sent");

        *self = Self::new();
        Ok(tx)
    }

    fn ensure_step(&self, expected: WizardStep, action: &'static str) -> Result<(), EngineError> {
        if self.step != expected {
            return Err(EngineError::WizardStepViolation {
                step: self.step,
                action,
            });
        }
        Ok(())
    }

    fn refresh_quote(&mut self, desk: &BackOffice<A>) -> Result<(), EngineError> {
        self.quote = match (self.send_amount, self.recipient_id.as_deref()) {
            (Some(amount), Some(recipient_id)) if amount.is_positive() => {
                Some(desk.quote_for_recipient(amount, self.send_currency, recipient_id)?)
            }
            _ => None,
        };
        Ok(())
    }
}

impl<A: AmountType> Default for TransferWizard<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExchangeRate, FeeSchedule, FixedPoint, RateTable, RecipientDraft};

    fn desk() -> BackOffice<FixedPoint> {
        let rates = RateTable::new(vec![ExchangeRate {
            from: Currency::Usd,
            to: Currency::Mxn,
            rate: FixedPoint::from_decimal_str("17.15").unwrap(),
            fees: FeeSchedule {
                fixed: FixedPoint::from_int(5),
                percentage: FixedPoint::from_decimal_str("0.4").unwrap(),
            },
        }]);

        let mut desk = BackOffice::new(rates, "2024-03-15");
        desk.add_recipient(RecipientDraft {
            name: "Maria Gonzalez".to_string(),
            bank_name: "BBVA Mexico".to_string(),
            account_number: "012180001234567890".to_string(),
            swift_code: "BCMRMXMMPYM".to_string(),
            currency: Currency::Mxn,
            country: "Mexico".to_string(),
        })
        .unwrap();
        desk
    }

    fn filled_wizard(desk: &BackOffice<FixedPoint>) -> TransferWizard<FixedPoint> {
        let mut wizard = TransferWizard::new();
        wizard.set_amount(desk, FixedPoint::from_int(5000)).unwrap();
        wizard.select_recipient(desk, "RCP001").unwrap();
        wizard
    }

    #[test]
    fn starts_in_amount_step_with_cleared_fields() {
        let wizard = TransferWizard::<FixedPoint>::new();

        assert_eq!(wizard.step(), WizardStep::Amount);
        assert!(wizard.send_amount().is_none());
        assert!(wizard.recipient_id().is_none());
        assert!(wizard.quote().is_none());
        assert_eq!(wizard.send_currency(), Currency::Usd);
    }

    #[test]
    fn edits_recompute_the_quote_synchronously() {
        let desk = desk();
        let mut wizard = TransferWizard::new();

        // Amount alone is not enough for a quote
        wizard.set_amount(&desk, FixedPoint::from_int(5000)).unwrap();
        assert!(wizard.quote().is_none());

        // Selecting a recipient completes the inputs
        wizard.select_recipient(&desk, "RCP001").unwrap();
        let quote = wizard.quote().unwrap();
        assert_eq!(quote.receive_amount, FixedPoint::from_int(85_750));

        // Changing the amount recomputes immediately
        wizard.set_amount(&desk, FixedPoint::from_int(100)).unwrap();
        let quote = wizard.quote().unwrap();
        assert_eq!(quote.receive_amount, FixedPoint::from_int(1715));
    }

    #[test]
    fn full_flow_appends_exactly_one_pending_transaction() {
        let mut desk = desk();
        let mut wizard = filled_wizard(&desk);

        assert_eq!(wizard.next(&desk).unwrap(), WizardStep::Review);
        assert_eq!(wizard.next(&desk).unwrap(), WizardStep::Confirm);

        let tx = wizard.send(&mut desk).unwrap();

        assert_eq!(desk.transaction_count(), 1);
        assert_eq!(tx.id, "TXN001");
        assert_eq!(tx.status, TransferStatus::Pending);
        assert_eq!(tx.send_amount, FixedPoint::from_int(5000));
        assert_eq!(tx.receive_amount, FixedPoint::from_int(85_750));
        assert_eq!(tx.fees, FixedPoint::from_int(25));
        assert_eq!(tx.total_cost, FixedPoint::from_int(5025));
        assert_eq!(tx.receive_currency, Currency::Mxn);
        assert_eq!(tx.date, "2024-03-15");
    }

    #[test]
    fn send_resets_the_wizard() {
        let mut desk = desk();
        let mut wizard = filled_wizard(&desk);
        wizard.next(&desk).unwrap();
        wizard.next(&desk).unwrap();
        wizard.send(&mut desk).unwrap();

        assert_eq!(wizard.step(), WizardStep::Amount);
        assert!(wizard.send_amount().is_none());
        assert!(wizard.recipient_id().is_none());
        assert!(wizard.quote().is_none());
    }

    #[test]
    fn next_from_amount_requires_amount_and_recipient() {
        let desk = desk();
        let mut wizard = TransferWizard::<FixedPoint>::new();

        assert_eq!(
            wizard.next(&desk),
            Err(EngineError::IncompleteTransfer("no amount entered"))
        );

        wizard.set_amount(&desk, FixedPoint::from_int(100)).unwrap();
        assert_eq!(
            wizard.next(&desk),
            Err(EngineError::IncompleteTransfer("no recipient selected"))
        );
    }

    #[test]
    fn next_rejects_non_positive_amount() {
        let desk = desk();
        let mut wizard = TransferWizard::new();
        wizard.set_amount(&desk, FixedPoint::zero()).unwrap();
        wizard.select_recipient(&desk, "RCP001").unwrap();

        assert_eq!(
            wizard.next(&desk),
            Err(EngineError::IncompleteTransfer("amount must be positive"))
        );
    }

    #[test]
    fn edits_are_rejected_outside_amount_step() {
        let desk = desk();
        let mut wizard = filled_wizard(&desk);
        wizard.next(&desk).unwrap();

        let result = wizard.set_amount(&desk, FixedPoint::from_int(1));
        assert_eq!(
            result,
            Err(EngineError::WizardStepViolation {
                step: WizardStep::Review,
                action: "set_amount",
            })
        );
    }

    #[test]
    fn back_navigates_one_step_only() {
        let desk = desk();
        let mut wizard = filled_wizard(&desk);
        wizard.next(&desk).unwrap();
        wizard.next(&desk).unwrap();

        assert_eq!(wizard.back().unwrap(), WizardStep::Review);
        assert_eq!(wizard.back().unwrap(), WizardStep::Amount);
        assert_eq!(
            wizard.back(),
            Err(EngineError::WizardStepViolation {
                step: WizardStep::Amount,
                action: "back",
            })
        );
    }

    #[test]
    fn send_is_rejected_before_confirm() {
        let mut desk = desk();
        let mut wizard = filled_wizard(&desk);

        assert_eq!(
            wizard.send(&mut desk),
            Err(EngineError::WizardStepViolation {
                step: WizardStep::Amount,
                action: "send",
            })
        );

        wizard.next(&desk).unwrap();
        assert_eq!(
            wizard.send(&mut desk),
            Err(EngineError::WizardStepViolation {
                step: WizardStep::Review,
                action: "send",
            })
        );

        assert_eq!(desk.transaction_count(), 0);
    }

    #[test]
    fn abandoning_the_wizard_has_no_side_effects() {
        let desk = desk();
        {
            let mut wizard = filled_wizard(&desk);
            wizard.next(&desk).unwrap();
            wizard.next(&desk).unwrap();
            // Dropped without send
        }

        assert_eq!(desk.transaction_count(), 0);
    }

    #[test]
    fn selecting_unknown_recipient_fails() {
        let desk = desk();
        let mut wizard = TransferWizard::<FixedPoint>::new();

        assert_eq!(
            wizard.select_recipient(&desk, "RCP404"),
            Err(EngineError::RecipientNotFound("RCP404".to_string()))
        );
    }

    #[test]
    fn zeroed_quote_still_flows_through_to_send() {
        // USD -> JPY is not configured; the flow still completes, with
        // zeroed figures.
        let rates = RateTable::new(vec![]);
        let mut desk = BackOffice::new(rates, "2024-03-15");
        desk.add_recipient(RecipientDraft {
            name: "Kenji Sato".to_string(),
            bank_name: "MUFG".to_string(),
            account_number: "1234567".to_string(),
            swift_code: "BOTKJPJT".to_string(),
            currency: Currency::Jpy,
            country: "Japan".to_string(),
        })
        .unwrap();

        let mut wizard = TransferWizard::new();
        wizard.set_amount(&desk, FixedPoint::from_int(5000)).unwrap();
        wizard.select_recipient(&desk, "RCP001").unwrap();
        assert!(wizard.quote().unwrap().is_zeroed());

        wizard.next(&desk).unwrap();
        wizard.next(&desk).unwrap();
        let tx = wizard.send(&mut desk).unwrap();

        assert_eq!(tx.exchange_rate, FixedPoint::zero());
        assert_eq!(tx.fees, FixedPoint::zero());
        assert_eq!(tx.receive_amount, FixedPoint::zero());
        assert_eq!(tx.send_amount, FixedPoint::from_int(5000));
    }
}
