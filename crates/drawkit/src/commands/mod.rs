pub mod add;
pub mod convert;
pub mod init;
pub mod search;
