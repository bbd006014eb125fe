pub mod limit;
pub mod partner;
