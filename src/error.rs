use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Please fill all valid customer details: {0}")]
    InvalidCustomerInfo(String),
    #[error("Not enough stock for {product}. Available: {available} (requested {requested})")]
    OutOfStock {
        product: String,
        requested: u32,
        available: u32,
    },
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u32),
    #[error("Order not found: {0}")]
    OrderNotFound(String),
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(String),
    #[error("No order has been placed in this session")]
    NoActiveOrder,
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
