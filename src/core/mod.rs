// Core modules implementing error modeling.
pub mod error;
