//! Repository modules for database operations.

pub mod games;
pub mod users;

pub use games::GameRepo;
pub use users::UserRepo;
