mod calculator_info;
mod category;

pub use calculator_info::CalculatorInfo;
pub use category::Category;
