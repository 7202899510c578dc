//! Data models for extracted infraction notices.

pub mod notice;

pub use notice::{NoticeRecord, StatusExtracao};
