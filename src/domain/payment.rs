use crate::error::{Result, StoreError};
use std::collections::BTreeMap;

/// Anything that can confirm a payment.
///
/// Payments are simulated: no processor is contacted and there is no
/// failure path.
pub trait PaymentMethod: Send + Sync {
    /// Human readable label, e.g. "Credit Card".
    fn label(&self) -> &str;

    fn process_payment(&self) -> String;
}

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &str {
        "Credit Card"
    }

    fn process_payment(&self) -> String {
        "Processing credit card payment...".to_string()
    }
}

pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn label(&self) -> &str {
        "PayPal"
    }

    fn process_payment(&self) -> String {
        "Processing PayPal payment...".to_string()
    }
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;

/// Payment methods offered at checkout, looked up by label.
pub struct PaymentMethods {
    methods: BTreeMap<String, PaymentMethodBox>,
}

impl Default for PaymentMethods {
    fn default() -> Self {
        let mut methods = Self::empty();
        methods.register(Box::new(CreditCardPayment));
        methods.register(Box::new(PayPalPayment));
        methods
    }
}

impl PaymentMethods {
    pub fn empty() -> Self {
        Self {
            methods: BTreeMap::new(),
        }
    }

    /// Adds a method. A method with the same normalized label is replaced.
    pub fn register(&mut self, method: PaymentMethodBox) {
        self.methods.insert(normalize(method.label()), method);
    }

    /// Finds a method by label, ignoring case, spaces and punctuation.
    pub fn resolve(&self, label: &str) -> Result<&dyn PaymentMethod> {
        self.methods
            .get(&normalize(label))
            .map(|m| &**m)
            .ok_or_else(|| StoreError::UnknownPaymentMethod(label.trim().to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.methods.values().map(|m| m.label())
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
