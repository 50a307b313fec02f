pub mod fifs_registrar;
pub mod ownable;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod reverse_registrar;
pub mod utils;
