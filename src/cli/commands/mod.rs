pub mod operations;
pub mod replay;
