mod list;

pub use list::users_list;
