pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod io;
pub mod load;
pub mod notify;
pub mod store;
pub mod view;
