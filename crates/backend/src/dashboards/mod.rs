pub mod d400_regional_sales;
