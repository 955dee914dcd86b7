use rust_decimal_macros::dec;
use std::sync::Arc;
use storefront::application::session::{Session, SessionConfig};
use storefront::application::storefront::Storefront;
use storefront::domain::catalog::Catalog;
use storefront::domain::customer::{Customer, CustomerForm};
use storefront::domain::payment::{CreditCardPayment, PaymentMethod};
use storefront::domain::product::{Price, Product, ProductId, Quantity};
use storefront::domain::validation::is_valid_email;
use storefront::error::StoreError;
use storefront::infrastructure::in_memory::{InMemoryOrderStore, InMemoryProductStore};

fn storefront(catalog: Catalog) -> Storefront {
    Storefront::new(
        Box::new(InMemoryProductStore::new(catalog)),
        Box::new(InMemoryOrderStore::new()),
    )
}

fn customer() -> Customer {
    CustomerForm::new("Grace", "grace@example.com", "Arlington, VA")
        .validate()
        .unwrap()
}

fn qty(n: u32) -> Quantity {
    Quantity::new(n).unwrap()
}

#[tokio::test]
async fn test_every_quantity_within_stock_succeeds() {
    let price = Price::new(dec!(12.50)).unwrap();
    for q in 1..=5 {
        let catalog = Catalog::new([Product::new(1, "Mug", "", price, 5)]).unwrap();
        let store = storefront(catalog);

        let order = store.place_order(ProductId(1), qty(q), customer()).await.unwrap();

        assert_eq!(store.stock(ProductId(1)).await.unwrap(), 5 - q);
        assert_eq!(order.total, price.checked_mul(qty(q)).unwrap());
        assert_eq!(store.history().await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_every_quantity_over_stock_fails() {
    let store = storefront(Catalog::new([Product::new(1, "Mug", "", Price::ZERO, 5)]).unwrap());
    for q in 6..=10 {
        let result = store.place_order(ProductId(1), qty(q), customer()).await;
        assert!(matches!(result, Err(StoreError::OutOfStock { available: 5, .. })));
    }
    assert_eq!(store.stock(ProductId(1)).await.unwrap(), 5);
    assert!(store.history().await.unwrap().is_empty());
}

#[test]
fn test_email_examples() {
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("nope"));
    assert!(is_valid_email("a@b.c-trailing-garbage"));
}

#[tokio::test]
async fn test_laptop_end_to_end() {
    let store = storefront(Catalog::demo());
    assert_eq!(store.price(ProductId(1)).await.unwrap().value(), dec!(1000));
    assert!(store.is_in_stock(ProductId(1), qty(50)).await.unwrap());

    let order = store.place_order(ProductId(1), qty(2), customer()).await.unwrap();
    assert_eq!(order.quantity, 2);
    assert_eq!(order.total.value(), dec!(2000));
    assert!(!order.is_paid());
    assert_eq!(store.stock(ProductId(1)).await.unwrap(), 48);

    store.mark_paid(&order.id).await.unwrap();
    store.mark_paid(&order.id).await.unwrap();
    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_paid());

    assert_eq!(
        CreditCardPayment.process_payment(),
        "Processing credit card payment..."
    );
}

#[tokio::test]
async fn test_unpaid_order_keeps_stock_deducted() {
    let store = storefront(Catalog::demo());
    let mut session = Session::new(&store, SessionConfig::default());

    let first = session
        .submit_order("Smartphone", 10, CustomerForm::new("A", "a@b.c", "X"))
        .await
        .unwrap();
    let second = session
        .submit_order("Smartphone", 5, CustomerForm::new("B", "b@c.d", "Y"))
        .await
        .unwrap();
    session.pay("Credit Card").await.unwrap();

    // Only the current (second) order gets paid; the first stays placed.
    assert!(!store.order(&first.id).await.unwrap().is_paid());
    assert!(store.order(&second.id).await.unwrap().is_paid());
    assert_eq!(store.stock(ProductId(2)).await.unwrap(), 85);
}

#[tokio::test]
async fn test_concurrent_sessions_share_stock_safely() {
    let catalog = Catalog::new([Product::new(1, "Ticket", "Front row", Price::ZERO, 10)]).unwrap();
    let store = Arc::new(storefront(catalog));

    let mut handles = Vec::new();
    for i in 0..25 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let mut session = Session::new(&store, SessionConfig::default());
            let form = CustomerForm::new(format!("Fan {i}"), "fan@example.com", "Stadium");
            session.submit_order("Ticket", 1, form).await
        }));
    }

    let mut sold = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => sold += 1,
            Err(StoreError::OutOfStock { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(sold, 10);
    assert_eq!(store.stock(ProductId(1)).await.unwrap(), 0);
    assert_eq!(store.history().await.unwrap().len(), 10);
}
