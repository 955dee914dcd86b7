use crate::domain::product::Product;
use crate::error::Result;
use std::io::Write;

/// Writes catalog listings as CSV.
pub struct ProductWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ProductWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_products<'a>(
        &mut self,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Result<()> {
        let mut empty = true;
        for product in products {
            self.writer.serialize(product)?;
            empty = false;
        }
        if empty {
            self.writer
                .write_record(["id", "name", "description", "price", "stock"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
