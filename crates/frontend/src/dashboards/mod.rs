pub mod d400_regional_sales;

pub use d400_regional_sales::ui::RegionalSalesDashboard;
