pub mod category;
pub mod medication;
