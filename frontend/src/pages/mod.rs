pub mod create_group;
