pub mod limits;
pub mod partners;
#[cfg(test)]
pub mod test_utils;

pub use limits::Limits;
pub use partners::Partners;
