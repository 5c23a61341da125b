use std::fs::File;
use std::path::{Path, PathBuf};

use super::error::AppError;
use crate::domain::{AmountType, Currency, FixedPoint};
use crate::engine::TransferWizard;
use crate::fixtures::seeded_back_office;
use crate::io::{read_recipients, write_invoice_summary, write_transaction_history};

const USAGE: &str = "Usage: paydesk <command>
Commands:
  summary                                  list seeded registries
  quote <amount> <from> <to>               quote a currency pair
  send <amount> <from> <recipient-id>      run the transfer wizard
  export-transactions <path>               write transaction history CSV
  export-invoices <path>                   write invoice summary CSV
  import-recipients <path>                 bulk-add recipients from CSV";

/// One invocation of the demo binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summary,
    Quote {
        amount: FixedPoint,
        from: Currency,
        to: Currency,
    },
    Send {
        amount: FixedPoint,
        currency: Currency,
        recipient_id: String,
    },
    ExportTransactions {
        path: PathBuf,
    },
    ExportInvoices {
        path: PathBuf,
    },
    ImportRecipients {
        path: PathBuf,
    },
}

/// Parse and validate command-line arguments
pub fn parse_args(args: Vec<String>) -> Result<Command, AppError> {
    let usage = || AppError::InvalidArguments(USAGE.to_string());

    match args.get(1).map(String::as_str) {
        Some("summary") => {
            take_operands::<0>(&args)?;
            Ok(Command::Summary)
        }
        Some("quote") => {
            let [amount, from, to] = take_operands::<3>(&args)?;
            Ok(Command::Quote {
                amount: parse_amount(&amount)?,
                from: parse_currency(&from)?,
                to: parse_currency(&to)?,
            })
        }
        Some("send") => {
            let [amount, currency, recipient_id] = take_operands::<3>(&args)?;
            Ok(Command::Send {
                amount: parse_amount(&amount)?,
                currency: parse_currency(&currency)?,
                recipient_id,
            })
        }
        Some("export-transactions") => {
            let [path] = take_operands::<1>(&args)?;
            Ok(Command::ExportTransactions { path: path.into() })
        }
        Some("export-invoices") => {
            let [path] = take_operands::<1>(&args)?;
            Ok(Command::ExportInvoices { path: path.into() })
        }
        Some("import-recipients") => {
            let [path] = take_operands::<1>(&args)?;
            Ok(Command::ImportRecipients { path: path.into() })
        }
        _ => Err(usage()),
    }
}

fn take_operands<const N: usize>(args: &[String]) -> Result<[String; N], AppError> {
    let operands: Vec<String> = args.iter().skip(2).cloned().collect();
    operands
        .try_into()
        .map_err(|_| AppError::InvalidArguments(USAGE.to_string()))
}

fn parse_amount(s: &str) -> Result<FixedPoint, AppError> {
    FixedPoint::from_decimal_str(s)
        .map_err(|_| AppError::InvalidArguments(format!("not a valid amount: {s}")))
}

fn parse_currency(s: &str) -> Result<Currency, AppError> {
    s.parse()
        .map_err(|_| AppError::InvalidArguments(format!("not a valid currency code: {s}")))
}

/// Execute a command against a freshly seeded back office.
///
/// Every invocation starts from the fixtures and forgets everything on
/// exit; there is no persistence to carry state between runs.
pub fn run(command: Command) -> Result<(), AppError> {
    let mut desk = seeded_back_office()?;

    match command {
        Command::Summary => {
            println!("recipients: {}", desk.recipients().len());
            for recipient in desk.recipients() {
                println!(
                    "  {}  {}  {} ({})",
                    recipient.id, recipient.name, recipient.bank_name, recipient.currency
                );
            }
            println!("customers: {}", desk.customers().len());
            for customer in desk.customers() {
                println!("  {}  {}  {}", customer.id, customer.name, customer.email);
            }
            println!("invoices: {}", desk.invoices().len());
            for invoice in desk.invoices() {
                println!(
                    "  {}  {}  {}  {} {}",
                    invoice.id,
                    invoice.customer_id,
                    invoice.status,
                    invoice.amount.to_money_string(),
                    invoice.currency
                );
            }
            println!("transactions: {}", desk.transaction_count());
            for tx in desk.transactions() {
                println!(
                    "  {}  {} {} -> {} {}  [{}]",
                    tx.id,
                    tx.send_amount.to_money_string(),
                    tx.send_currency,
                    tx.receive_amount.to_money_string(),
                    tx.receive_currency,
                    tx.status
                );
            }
        }
        Command::Quote { amount, from, to } => {
            let quote = desk.quote_pair(amount, from, to)?;
            println!("rate:    {}", quote.exchange_rate.to_decimal_string());
            println!("fees:    {}", quote.fees.to_money_string());
            println!(
                "receive: {} {}",
                quote.receive_amount.to_money_string(),
                to
            );
            println!(
                "total:   {} {}",
                quote.total_cost.to_money_string(),
                from
            );
        }
        Command::Send {
            amount,
            currency,
            recipient_id,
        } => {
            let mut wizard = TransferWizard::new();
            wizard.set_amount(&desk, amount)?;
            wizard.set_currency(&desk, currency)?;
            wizard.select_recipient(&desk, &recipient_id)?;
            wizard.next(&desk)?;
            wizard.next(&desk)?;
            let tx = wizard.send(&mut desk)?;

            println!("sent {}  tracking {}", tx.id, tx.tracking_number);
            println!(
                "  {} {} -> {} {}  (fees {}, total {})",
                tx.send_amount.to_money_string(),
                tx.send_currency,
                tx.receive_amount.to_money_string(),
                tx.receive_currency,
                tx.fees.to_money_string(),
                tx.total_cost.to_money_string()
            );
        }
        Command::ExportTransactions { path } => {
            let file = File::create(&path)?;
            write_transaction_history(desk.transaction_log(), file)?;
            println!(
                "wrote {} transactions to {}",
                desk.transaction_count(),
                path.display()
            );
        }
        Command::ExportInvoices { path } => {
            let file = File::create(&path)?;
            write_invoice_summary(desk.invoice_registry(), file)?;
            println!("wrote {} invoices to {}", desk.invoices().len(), path.display());
        }
        Command::ImportRecipients { path } => {
            let file = open_existing(&path)?;
            let drafts = read_recipients(file)?;
            let count = drafts.len();
            for draft in drafts {
                let recipient = desk.add_recipient(draft)?;
                println!("added {}  {}", recipient.id, recipient.name);
            }
            println!("imported {count} recipients (in-memory only)");
        }
    }

    Ok(())
}

fn open_existing(path: &Path) -> Result<File, AppError> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}
