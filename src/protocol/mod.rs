pub mod notice;
pub mod primitive;


pub use notice::{Notice, NoticeFrameBytes, Scalar, SessionStateChange, Warning};
