pub mod frame;
pub mod tools;
pub mod dispatcher;

pub use frame::{Command, FrameInput};
pub use dispatcher::{apply_frame_input, handle_input};
