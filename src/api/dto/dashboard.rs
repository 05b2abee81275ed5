//! DTO for the dashboard summary report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, DisplayFromStr, serde_as};

use crate::utils::CaseInsensitiveMap;

/// Aggregate figures for an inclusive reporting window.
///
/// Produced by the reporting layer and returned to clients as-is. The DTO does
/// not check that `from <= to`, that counts are non-negative, or that
/// `assistance_paid_by_bill_type` sums to `assistance_paid_total`; those are
/// guarantees of the producer.
///
/// # Wire format
///
/// ```json
/// {
///   "from": "2024-01-01",
///   "to": "2024-01-31",
///   "householdsServed": 120,
///   "clientsServed": 342,
///   "pantryItemTotals": { "Canned Goods": 410 },
///   "assistancePaidTotal": "1520.75",
///   "assistancePaidByBillType": { "Electric": "1020.75", "Water": "500.00" },
///   "applicationsByStatus": { "Approved": 18, "Pending": 4 }
/// }
/// ```
///
/// Decimals travel as exact strings in both directions. JSON numbers are
/// rejected, since a parser would read them through `f64` and round them.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub from: NaiveDate,
    pub to: NaiveDate,

    #[serde(default)]
    pub households_served: i64,

    #[serde(default)]
    pub clients_served: i64,

    /// Quantity distributed per pantry item.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub pantry_item_totals: CaseInsensitiveMap<i64>,

    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub assistance_paid_total: Decimal,

    #[serde_as(as = "DefaultOnNull<CaseInsensitiveMap<DisplayFromStr>>")]
    #[serde(default)]
    pub assistance_paid_by_bill_type: CaseInsensitiveMap<Decimal>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub applications_by_status: CaseInsensitiveMap<i64>,
}

impl DashboardSummaryDto {
    /// Creates an empty summary for the window `from..=to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            households_served: 0,
            clients_served: 0,
            pantry_item_totals: CaseInsensitiveMap::new(),
            assistance_paid_total: Decimal::ZERO,
            assistance_paid_by_bill_type: CaseInsensitiveMap::new(),
            applications_by_status: CaseInsensitiveMap::new(),
        }
    }
}
