use std::fmt;
use std::str::FromStr;

use super::amount::AmountType;
use super::currency::Currency;
use super::error::DomainError;

/// Delivery status of a remittance.
///
/// Statuses are illustrative: records are appended with `Pending` and no
/// operation transitions them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Processing,
    InTransit,
    Delivered,
    Cancelled,
    Failed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for TransferStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "in-transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::MissingField("status")),
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one transfer attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemittanceTransaction<A: AmountType> {
    pub id: String,
    pub recipient_id: String,
    pub send_amount: A,
    pub send_currency: Currency,
    pub receive_amount: A,
    pub receive_currency: Currency,
    pub exchange_rate: A,
    pub fees: A,
    pub total_cost: A,
    pub status: TransferStatus,
    pub tracking_number: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::FixedPoint;

    #[test]
    fn status_round_trips_through_from_str() {
        let all = [
            TransferStatus::Pending,
            TransferStatus::Processing,
            TransferStatus::InTransit,
            TransferStatus::Delivered,
            TransferStatus::Cancelled,
            TransferStatus::Failed,
        ];

        for status in all {
            assert_eq!(status.as_str().parse::<TransferStatus>().unwrap(), status);
        }
    }

    #[test]
    fn in_transit_uses_kebab_case() {
        assert_eq!(TransferStatus::InTransit.as_str(), "in-transit");
        assert_eq!(
            "in-transit".parse::<TransferStatus>().unwrap(),
            TransferStatus::InTransit
        );
    }

    #[test]
    fn transaction_record_is_immutable_and_clonable() {
        let tx = RemittanceTransaction {
            id: "TXN001".to_string(),
            recipient_id: "RCP001".to_string(),
            send_amount: FixedPoint::from_int(5000),
            send_currency: Currency::Usd,
            receive_amount: FixedPoint::from_int(85_750),
            receive_currency: Currency::Mxn,
            exchange_rate: FixedPoint::from_decimal_str("17.15").unwrap(),
            fees: FixedPoint::from_int(25),
            total_cost: FixedPoint::from_int(5025),
            status: TransferStatus::Pending,
            tracking_number: "TRK4821907365".to_string(),
            date: "2024-03-15".to_string(),
        };

        let cloned = tx.clone();
        assert_eq!(tx, cloned);
        assert_eq!(cloned.status, TransferStatus::Pending);
    }
}
