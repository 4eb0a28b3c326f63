pub mod site_io;
pub mod state;
