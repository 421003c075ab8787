pub mod cli;
pub mod guard;
