pub mod d400_sales_overview;
