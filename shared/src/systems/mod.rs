pub mod greeting;
pub mod summation;
