pub mod errors;
pub mod utils;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

pub const SUCCESS_BODY: &str = "successful";
pub const ERROR_BODY: &str = "error";
