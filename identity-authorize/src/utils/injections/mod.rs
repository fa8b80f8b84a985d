pub mod identity_di;
