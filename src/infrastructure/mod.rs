pub mod auth;
pub mod azure_devops;
