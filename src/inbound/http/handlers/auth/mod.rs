mod login;
mod logout;
mod profile;
mod register;

pub use login::auth_login;
pub use logout::auth_logout;
pub use profile::auth_profile;
pub use register::auth_register;
