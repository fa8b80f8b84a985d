pub mod identity_lookup;
