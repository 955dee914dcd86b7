use super::product::{Price, Product, ProductId, Quantity};
use crate::error::{Result, StoreError};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// The set of products on sale, keyed by id.
///
/// Products are never removed. Stock only moves through [`Catalog::deduct`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting products that share an id.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for product in products {
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(StoreError::DuplicateProduct(id.0));
            }
        }
        Ok(Self { products: map })
    }

    /// The two-product catalog the storefront ships with.
    pub fn demo() -> Self {
        let mut products = BTreeMap::new();
        products.insert(
            ProductId(1),
            Product::new(
                1,
                "Laptop",
                "High performance laptop",
                Price(dec!(1000)),
                50,
            ),
        );
        products.insert(
            ProductId(2),
            Product::new(
                2,
                "Smartphone",
                "Latest model smartphone",
                Price(dec!(500)),
                100,
            ),
        );
        Self { products }
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .get(&id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let name = name.trim();
        self.products
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All products in id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn is_in_stock(&self, id: ProductId, quantity: Quantity) -> Result<bool> {
        Ok(self.get(id)?.is_in_stock(quantity))
    }

    pub fn price(&self, id: ProductId) -> Result<Price> {
        Ok(self.get(id)?.price)
    }

    pub fn stock(&self, id: ProductId) -> Result<u32> {
        Ok(self.get(id)?.stock)
    }

    /// Deducts stock and returns the product as it is afterwards.
    pub fn deduct(&mut self, id: ProductId, quantity: Quantity) -> Result<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;
        product.deduct(quantity)?;
        Ok(product.clone())
    }
}
