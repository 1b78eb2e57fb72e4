use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One submission of the bill form. Transient: consumed by a single
/// generation, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillInput {
    pub provider_name: String,
    pub branch_name: String,
    pub bill_number: String,
    pub expiration_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub debit_account_1: String,
    pub debit_account_2: String,
}

impl BillInput {
    /// The `F/<bill> <provider>` tag stamped on every row of the batch unless
    /// a posting convention suppresses it.
    pub fn detail_tag(&self) -> String {
        format!("F/{} {}", self.bill_number, self.provider_name)
    }

    /// The document reference carried by the provider credit row.
    pub fn document_tag(&self) -> String {
        format!("F/{}", self.bill_number)
    }

    /// ISO rendering of the expiration date, empty when the form left it
    /// blank.
    pub fn due_date_cell(&self) -> String {
        self.expiration_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// The two debit selections, in the order the form supplies them.
    pub fn debit_selections(&self) -> [&str; 2] {
        [&self.debit_account_1, &self.debit_account_2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bill() -> BillInput {
        BillInput {
            provider_name: "Acme".into(),
            branch_name: "Main".into(),
            bill_number: "100".into(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            amount: dec!(200),
            debit_account_1: "Fees".into(),
            debit_account_2: "Tax".into(),
        }
    }

    #[test]
    fn tags_combine_bill_number_and_provider() {
        assert_eq!(bill().detail_tag(), "F/100 Acme");
        assert_eq!(bill().document_tag(), "F/100");
    }

    #[test]
    fn due_date_cell_renders_iso_or_empty() {
        assert_eq!(bill().due_date_cell(), "2024-01-01");
        let mut blank = bill();
        blank.expiration_date = None;
        assert_eq!(blank.due_date_cell(), "");
    }
}
