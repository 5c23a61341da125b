//! Static seed data: the in-memory mock records a fresh back office
//! starts with, fabricated identifiers included.

use crate::domain::{
    AmountType, Currency, CustomerDraft, DomainError, ExchangeRate, FeeSchedule, FixedPoint,
    Invoice, InvoiceStatus, LineItem, RateTable, RecipientDraft, RemittanceTransaction,
    TransferStatus,
};
use crate::engine::{BackOffice, EngineError};

fn amount(s: &str) -> Result<FixedPoint, DomainError> {
    FixedPoint::from_decimal_str(s)
}

/// The static exchange-rate table. USD->JPY is deliberately absent: JPY
/// recipients exist, and quoting against them exercises the zeroed-quote
/// path.
pub fn rate_table() -> Result<RateTable<FixedPoint>, DomainError> {
    let pair = |from, to, rate: &str, fixed: &str, percentage: &str| {
        Ok::<_, DomainError>(ExchangeRate {
            from,
            to,
            rate: amount(rate)?,
            fees: FeeSchedule {
                fixed: amount(fixed)?,
                percentage: amount(percentage)?,
            },
        })
    };

    Ok(RateTable::new(vec![
        pair(Currency::Usd, Currency::Mxn, "17.15", "5", "0.4")?,
        pair(Currency::Usd, Currency::Inr, "83.12", "4", "0.35")?,
        pair(Currency::Usd, Currency::Php, "56.35", "4.5", "0.45")?,
        pair(Currency::Usd, Currency::Ngn, "1550.00", "6", "0.5")?,
        pair(Currency::Eur, Currency::Usd, "1.09", "3.5", "0.3")?,
        pair(Currency::Gbp, Currency::Usd, "1.27", "3.5", "0.3")?,
    ]))
}

pub fn seed_recipients() -> Vec<RecipientDraft> {
    let draft = |name: &str, bank: &str, account: &str, swift: &str, currency, country: &str| {
        RecipientDraft {
            name: name.to_string(),
            bank_name: bank.to_string(),
            account_number: account.to_string(),
            swift_code: swift.to_string(),
            currency,
            country: country.to_string(),
        }
    };

    vec![
        draft(
            "Maria Gonzalez",
            "BBVA Mexico",
            "012180001234567890",
            "BCMRMXMMPYM",
            Currency::Mxn,
            "Mexico",
        ),
        draft(
            "Priya Sharma",
            "HDFC Bank",
            "50100234567890",
            "HDFCINBB",
            Currency::Inr,
            "India",
        ),
        draft(
            "Jose Santos",
            "BDO Unibank",
            "002345678901",
            "BNORPHMM",
            Currency::Php,
            "Philippines",
        ),
        draft(
            "Chidi Okafor",
            "Guaranty Trust Bank",
            "0123456789",
            "GTBINGLA",
            Currency::Ngn,
            "Nigeria",
        ),
        draft(
            "Kenji Sato",
            "MUFG Bank",
            "1234567",
            "BOTKJPJT",
            Currency::Jpy,
            "Japan",
        ),
    ]
}

pub fn seed_customers() -> Vec<CustomerDraft> {
    let draft = |name: &str, email: &str, phone: &str, company: &str, country: &str| {
        CustomerDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: company.to_string(),
            country: country.to_string(),
        }
    };

    vec![
        draft(
            "Acme Trading LLC",
            "billing@acmetrading.example",
            "+1-555-0142",
            "Acme Trading",
            "United States",
        ),
        draft(
            "Nordwind Logistics GmbH",
            "accounts@nordwind.example",
            "+49-30-555-0199",
            "Nordwind Logistics",
            "Germany",
        ),
        draft(
            "Sunrise Textiles Ltd",
            "finance@sunrisetextiles.example",
            "+91-22-5550-1765",
            "Sunrise Textiles",
            "India",
        ),
        draft(
            "Pacific Harvest Co",
            "ap@pacificharvest.example",
            "+63-2-5550-8347",
            "Pacific Harvest",
            "Philippines",
        ),
    ]
}

pub fn seed_invoices() -> Result<Vec<Invoice<FixedPoint>>, DomainError> {
    Ok(vec![
        // Line items present and consistent: 1500 + 300 = 1800, tax 8.25%
        Invoice {
            id: "INV-2024-001".to_string(),
            customer_id: "CUST001".to_string(),
            issued_date: "2024-03-01".to_string(),
            due_date: "2024-03-31".to_string(),
            status: InvoiceStatus::Pending,
            currency: Currency::Usd,
            subtotal: amount("1800")?,
            tax_rate: amount("8.25")?,
            tax_amount: amount("148.50")?,
            amount: amount("1948.50")?,
            line_items: vec![
                LineItem::new("Consulting services", 10, amount("150")?),
                LineItem::new("Cloud hosting", 1, amount("300")?),
            ],
        },
        // Header-only invoice, no line items
        Invoice {
            id: "INV-2024-002".to_string(),
            customer_id: "CUST002".to_string(),
            issued_date: "2024-02-12".to_string(),
            due_date: "2024-03-12".to_string(),
            status: InvoiceStatus::Paid,
            currency: Currency::Usd,
            subtotal: amount("5200")?,
            tax_rate: FixedPoint::zero(),
            tax_amount: FixedPoint::zero(),
            amount: amount("5200")?,
            line_items: Vec::new(),
        },
        Invoice {
            id: "INV-2024-003".to_string(),
            customer_id: "CUST003".to_string(),
            issued_date: "2024-02-25".to_string(),
            due_date: "2024-03-25".to_string(),
            status: InvoiceStatus::Discounted,
            currency: Currency::Usd,
            subtotal: amount("1800")?,
            tax_rate: FixedPoint::zero(),
            tax_amount: FixedPoint::zero(),
            amount: amount("1800")?,
            line_items: vec![LineItem::new("Market research", 4, amount("450")?)],
        },
        Invoice {
            id: "INV-2024-004".to_string(),
            customer_id: "CUST004".to_string(),
            issued_date: "2024-01-10".to_string(),
            due_date: "2024-02-10".to_string(),
            status: InvoiceStatus::PaymentPlan,
            currency: Currency::Usd,
            subtotal: amount("12000")?,
            tax_rate: amount("5")?,
            tax_amount: amount("600")?,
            amount: amount("12600")?,
            line_items: vec![LineItem::new("Annual license", 12, amount("1000")?)],
        },
    ])
}

pub fn seed_transactions() -> Result<Vec<RemittanceTransaction<FixedPoint>>, DomainError> {
    let tx = |id: &str,
              recipient_id: &str,
              send: &str,
              receive: &str,
              to: Currency,
              rate: &str,
              fees: &str,
              total: &str,
              status,
              tracking: &str,
              date: &str| {
        Ok::<_, DomainError>(RemittanceTransaction {
            id: id.to_string(),
            recipient_id: recipient_id.to_string(),
            send_amount: amount(send)?,
            send_currency: Currency::Usd,
            receive_amount: amount(receive)?,
            receive_currency: to,
            exchange_rate: amount(rate)?,
            fees: amount(fees)?,
            total_cost: amount(total)?,
            status,
            tracking_number: tracking.to_string(),
            date: date.to_string(),
        })
    };

    Ok(vec![
        // The worked example: 5000 USD -> MXN at 17.15, fees 5 + 0.4%
        tx(
            "TXN001",
            "RCP001",
            "5000",
            "85750",
            Currency::Mxn,
            "17.15",
            "25",
            "5025",
            TransferStatus::Delivered,
            "TRK4821907365",
            "2024-03-02",
        )?,
        tx(
            "TXN002",
            "RCP002",
            "1200",
            "99744",
            Currency::Inr,
            "83.12",
            "8.20",
            "1208.20",
            TransferStatus::InTransit,
            "TRK9643814730",
            "2024-03-08",
        )?,
        tx(
            "TXN003",
            "RCP003",
            "800",
            "45080",
            Currency::Php,
            "56.35",
            "8.10",
            "808.10",
            TransferStatus::Processing,
            "TRK4465722095",
            "2024-03-11",
        )?,
        tx(
            "TXN004",
            "RCP004",
            "300",
            "465000",
            Currency::Ngn,
            "1550.00",
            "7.50",
            "307.50",
            TransferStatus::Pending,
            "TRK9287629460",
            "2024-03-14",
        )?,
        tx(
            "TXN005",
            "RCP001",
            "2000",
            "34300",
            Currency::Mxn,
            "17.15",
            "13",
            "2013",
            TransferStatus::Cancelled,
            "TRK4109536825",
            "2024-03-14",
        )?,
    ])
}

/// A back office populated with every fixture, numbering resumed past
/// the seeded ids.
pub fn seeded_back_office() -> Result<BackOffice<FixedPoint>, EngineError> {
    let mut desk = BackOffice::new(rate_table()?, "2024-03-15");

    for draft in seed_recipients() {
        desk.add_recipient(draft)?;
    }
    for draft in seed_customers() {
        desk.add_customer(draft)?;
    }
    for invoice in seed_invoices()? {
        desk.create_invoice(invoice)?;
    }
    for tx in seed_transactions()? {
        desk.append_transaction(tx);
    }

    desk.resume_sequences(6, 5, 5, 6);
    Ok(desk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_transfer_quote;

    #[test]
    fn seeded_back_office_has_all_fixtures() {
        let desk = seeded_back_office().unwrap();

        assert_eq!(desk.recipients().len(), 5);
        assert_eq!(desk.customers().len(), 4);
        assert_eq!(desk.invoices().len(), 4);
        assert_eq!(desk.transaction_count(), 5);
        assert_eq!(desk.rates().len(), 6);
    }

    #[test]
    fn txn001_matches_its_own_quote() {
        // The seeded record and a fresh quote over the seeded table must
        // agree: receive 85750, fees 25, total 5025.
        let table = rate_table().unwrap();
        let seeded = seed_transactions().unwrap();
        let txn001 = &seeded[0];

        let quote = compute_transfer_quote(
            &table,
            txn001.send_amount,
            txn001.send_currency,
            txn001.receive_currency,
        )
        .unwrap();

        assert_eq!(quote.exchange_rate, txn001.exchange_rate);
        assert_eq!(quote.fees, txn001.fees);
        assert_eq!(quote.receive_amount, txn001.receive_amount);
        assert_eq!(quote.total_cost, txn001.total_cost);
    }

    #[test]
    fn every_seeded_transaction_is_consistent_with_the_rate_table() {
        let table = rate_table().unwrap();

        for tx in seed_transactions().unwrap() {
            let quote = compute_transfer_quote(
                &table,
                tx.send_amount,
                tx.send_currency,
                tx.receive_currency,
            )
            .unwrap();

            assert_eq!(quote.fees, tx.fees, "fees mismatch for {}", tx.id);
            assert_eq!(
                quote.receive_amount, tx.receive_amount,
                "receive mismatch for {}",
                tx.id
            );
            assert_eq!(
                quote.total_cost, tx.total_cost,
                "total mismatch for {}",
                tx.id
            );
        }
    }

    #[test]
    fn seeded_ids_resume_past_fixtures() {
        let mut desk = seeded_back_office().unwrap();
        assert_eq!(desk.next_transaction_id(), "TXN006");
        assert_eq!(desk.next_invoice_id(), "INV-2024-005");
    }

    #[test]
    fn jpy_recipient_has_no_rate_pair() {
        let desk = seeded_back_office().unwrap();
        let kenji = desk.recipient("RCP005").unwrap();
        assert_eq!(kenji.currency, Currency::Jpy);
        assert!(
            desk.rates()
                .lookup(Currency::Usd, Currency::Jpy)
                .is_none()
        );
    }

    #[test]
    fn seeded_invoice_with_items_is_internally_consistent() {
        let invoices = seed_invoices().unwrap();
        let first = &invoices[0];

        let totals =
            crate::domain::compute_invoice_totals(&first.line_items, first.tax_rate).unwrap();
        assert_eq!(totals.subtotal, first.subtotal);
        assert_eq!(totals.tax_amount, first.tax_amount);
        assert_eq!(totals.amount, first.amount);
    }
}
