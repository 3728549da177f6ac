pub mod credentials;
pub mod patch_builder;
pub mod work_item_gateway;
