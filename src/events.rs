pub mod countdown;
pub mod filter;
