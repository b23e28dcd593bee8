pub mod copy;
pub mod generate;
pub mod options;
