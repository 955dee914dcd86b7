use crate::application::session::Action;
use crate::domain::customer::CustomerForm;
use crate::error::{Result, StoreError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Order,
    Pay,
}

/// One row of an action script.
///
/// Order rows fill `product`, `quantity` and the customer columns; pay rows
/// fill `method`. Unused columns may be left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ActionRecord {
    pub r#type: ActionType,
    pub product: Option<String>,
    pub quantity: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub method: Option<String>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = StoreError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        match record.r#type {
            ActionType::Order => Ok(Action::PlaceOrder {
                product: record.product.ok_or_else(|| {
                    StoreError::ValidationError("Order missing product".to_string())
                })?,
                quantity: record.quantity.ok_or_else(|| {
                    StoreError::ValidationError("Order missing quantity".to_string())
                })?,
                form: CustomerForm {
                    name: record.name.unwrap_or_default(),
                    email: record.email.unwrap_or_default(),
                    address: record.address.unwrap_or_default(),
                },
            }),
            ActionType::Pay => Ok(Action::Pay {
                method: record.method.ok_or_else(|| {
                    StoreError::ValidationError("Payment missing method".to_string())
                })?,
            }),
        }
    }
}

/// Reads storefront actions from a CSV source.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one action per row. A bad row yields an error and
    /// reading continues with the next one.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader.into_deserialize().map(|result| {
            let record: ActionRecord = result.map_err(StoreError::from)?;
            Action::try_from(record)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "type,product,quantity,name,email,address,method";

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{HEADER}\norder, Laptop, 2, Ada, ada@example.com, 1 Analytical St,\npay,,,,,, Credit Card"
        );
        let actions: Vec<Result<Action>> = ActionReader::new(data.as_bytes()).actions().collect();

        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0].as_ref().unwrap(),
            &Action::PlaceOrder {
                product: "Laptop".to_string(),
                quantity: 2,
                form: CustomerForm::new("Ada", "ada@example.com", "1 Analytical St"),
            }
        );
        assert_eq!(
            actions[1].as_ref().unwrap(),
            &Action::Pay {
                method: "Credit Card".to_string()
            }
        );
    }

    #[test]
    fn test_reader_quoted_address() {
        let data = format!("{HEADER}\norder,Laptop,1,Ada,ada@example.com,\"1 Analytical St, London\",");
        let action = ActionReader::new(data.as_bytes())
            .actions()
            .next()
            .unwrap()
            .unwrap();
        let Action::PlaceOrder { form, .. } = action else {
            panic!("expected PlaceOrder");
        };
        assert_eq!(form.address, "1 Analytical St, London");
    }

    #[test]
    fn test_reader_bad_rows() {
        let data = format!(
            "{HEADER}\nrefund,Laptop,1,,,,\norder,Laptop,,Ada,ada@example.com,Street,\npay,,,,,,\norder,Laptop,two,Ada,a@b.c,Street,"
        );
        let actions: Vec<Result<Action>> = ActionReader::new(data.as_bytes()).actions().collect();

        assert_eq!(actions.len(), 4);
        assert!(matches!(actions[0], Err(StoreError::CsvError(_))));
        assert!(matches!(actions[1], Err(StoreError::ValidationError(_))));
        assert!(matches!(actions[2], Err(StoreError::ValidationError(_))));
        assert!(matches!(actions[3], Err(StoreError::CsvError(_))));
    }
}
