pub mod catalog_loader;
