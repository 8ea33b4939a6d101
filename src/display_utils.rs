pub mod display_record;
pub mod repo_table;
pub mod scheduled_fetch;
