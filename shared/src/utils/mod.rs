pub mod api_helper;
pub mod dynamodb;
pub mod unit_tests_helper;
