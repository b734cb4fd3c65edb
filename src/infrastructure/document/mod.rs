pub mod static_document;
