/// Data model and pure calculators: amounts, currencies, the record types,
/// the rate table, transfer quotes and invoice totals.
pub mod domain;

/// Id-keyed registries and the append-only transaction history, with the
/// in-memory backends that hold all state.
pub mod storage;

/// Back-office flows over the registries: the session object, the transfer
/// wizard state machine and the invoice editing session.
pub mod engine;

/// Static seed data, fabricated identifiers included.
pub mod fixtures;

/// CSV boundary: report export and bulk recipient import.
pub mod io;

/// Error unification and command parsing for the demo binary.
pub mod app;

pub mod prelude;
