pub mod config;
pub mod input;
pub mod methods;
pub mod run;
pub mod select;
pub mod version;
