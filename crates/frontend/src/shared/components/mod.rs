pub mod data_table;
pub mod kpi_card;

pub use data_table::DataTable;
pub use kpi_card::KpiCard;
