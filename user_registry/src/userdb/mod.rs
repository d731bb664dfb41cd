mod types;
mod user;

pub use types::User;
pub use user::UserStore;
