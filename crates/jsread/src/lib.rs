//! Reads a Linux joystick device (`/dev/input/js*`) and turns its binary
//! event stream into named `(channel, value)` events.
//!
//! ```no_run
//! use jsread::{Joystick, Settings};
//!
//! let mut js = Joystick::open(Settings::default())?;
//! loop {
//!     if let Some(event) = js.listen() {
//!         println!("{} = {}", event.channel, event.value);
//!     }
//! }
//! # Ok::<(), jsread::Error>(())
//! ```

mod caps;
mod device;
mod drain;
mod error;
mod event;
mod frame;
mod joystick;
mod poll;
mod settings;
mod source;
mod tables;

#[cfg(test)]
mod testing;

pub use crate::caps::{CapabilityQuery, Capabilities, ChannelMap, MAX_AXES, MAX_BUTTONS};
pub use crate::device::{list_devices, select_device, JsDevice};
pub use crate::drain::drain_initial_state;
pub use crate::error::{Error, Result};
pub use crate::event::{Event, Value};
pub use crate::frame::{FrameType, RawFrame, FRAME_SIZE};
pub use crate::joystick::Joystick;
pub use crate::poll::{ListenCycle, PollState, Step};
pub use crate::settings::{
    Settings, DEFAULT_DIR, DEFAULT_POLL_INTERVAL, DEFAULT_PREFIX, DEFAULT_TIMEOUT,
};
pub use crate::source::FrameSource;
pub use crate::tables::{axis_name, button_name};
