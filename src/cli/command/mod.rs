pub mod add;
pub mod completion;
pub mod init;
pub mod shared;
