pub mod confluence_template;
pub mod journal;
pub mod trade;
