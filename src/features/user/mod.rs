pub mod avatar;
pub mod error;

pub use avatar::store_avatar;
pub use error::UserUpdateError;
