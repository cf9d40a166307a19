pub mod experiment;
pub mod file;
pub mod product;
pub mod shared;
