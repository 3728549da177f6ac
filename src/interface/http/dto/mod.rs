pub mod auth;
pub mod work_item;
