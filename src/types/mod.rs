pub mod used_credentials;
