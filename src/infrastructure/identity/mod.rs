pub mod credentials;
pub mod firebase;
