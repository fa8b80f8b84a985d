pub mod get_identity;
