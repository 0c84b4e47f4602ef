pub mod article;
pub mod order;
pub mod salesperson;
