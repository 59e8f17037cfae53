pub mod cli;
mod preprocess;

pub use preprocess::preprocess;
