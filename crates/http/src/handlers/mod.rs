pub mod admin;
pub mod issues;
pub mod meta;
