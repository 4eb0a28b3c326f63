pub mod catalog;
pub mod config;
pub mod preference;
pub mod project;
pub mod site;

pub use catalog::*;
pub use config::*;
pub use preference::*;
pub use project::*;
pub use site::*;
