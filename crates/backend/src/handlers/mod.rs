// Dashboard handlers (d400)
pub mod d400_regional_sales;
