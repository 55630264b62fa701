pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::{ManualClock, SystemClock};
pub use controller::{Button, Controller};
pub use input_adapter::KeyboardState;
