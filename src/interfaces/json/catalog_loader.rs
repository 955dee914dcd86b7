use crate::domain::catalog::Catalog;
use crate::domain::product::Product;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a catalog from a JSON array of products.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog> {
    let products: Vec<Product> = serde_json::from_reader(source)?;
    Catalog::new(products)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let file = File::open(path)?;
    read_catalog(BufReader::new(file))
}
