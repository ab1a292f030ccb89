pub mod aggregate;
pub mod filter;
pub mod redistribute;
pub mod report;
pub mod week;
