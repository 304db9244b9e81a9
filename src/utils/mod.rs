pub mod jwt;
pub mod mail;
pub mod password;
pub mod validate;
pub mod webutils;
