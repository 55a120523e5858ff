pub mod grading;
pub mod question;
