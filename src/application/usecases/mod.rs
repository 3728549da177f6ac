pub mod create_work_item;
pub mod issue_token;
pub mod update_work_item;
