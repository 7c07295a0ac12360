pub mod check;
pub mod init;
pub mod review;
pub mod session;
pub mod validate;
