pub mod catalog;
pub mod evaluate;
