pub mod dto;
pub mod kpi;

pub use dto::*;
pub use kpi::{build_kpi_cards, KpiCard};
