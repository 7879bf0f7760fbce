pub mod errors;
pub mod open;
pub mod services;
pub mod url;
