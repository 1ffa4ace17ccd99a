pub mod observability;
pub mod png_export;
