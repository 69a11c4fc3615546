pub mod layouts;
pub mod parser;
