use std::thread;
use std::time::Instant;

use crate::caps::{CapabilityQuery, Capabilities, ChannelMap};
use crate::device::JsDevice;
use crate::drain::drain_initial_state;
use crate::error::Result;
use crate::event::Event;
use crate::poll::ListenCycle;
use crate::settings::Settings;
use crate::source::FrameSource;

/// A joystick that reports its input as named `(channel, value)` events.
///
/// Calls to [`Joystick::listen`] must be serialized; the device is owned by
/// this instance alone.
#[derive(Debug)]
pub struct Joystick<S = JsDevice> {
    device: S,
    caps: Capabilities,
    settings: Settings,
}

impl Joystick<JsDevice> {
    /// Opens the device selected by `settings` and primes it.
    pub fn open(settings: Settings) -> Result<Self> {
        let device = JsDevice::open(&settings)?;
        Self::new(device, settings)
    }
}

impl<S: FrameSource + CapabilityQuery> Joystick<S> {
    /// Resolves the channel maps of an already open device and drops the
    /// state reports the kernel queued on open.
    pub fn new(mut device: S, settings: Settings) -> Result<Self> {
        let caps = Capabilities::resolve(&device)?;
        drain_initial_state(&mut device);
        Ok(Self {
            device,
            caps,
            settings,
        })
    }
}

impl<S: FrameSource> Joystick<S> {
    /// Waits up to the configured timeout for input.
    ///
    /// Queued frames are drained and the most recent event is returned once
    /// the device goes quiet. With `stop_on_button` set, the first button
    /// event is returned right away. `None` means nothing happened before
    /// the timeout.
    pub fn listen(&mut self) -> Option<Event> {
        let mut cycle = ListenCycle::new(self.settings.timeout, self.settings.stop_on_button);
        while cycle.is_polling() {
            if let Some(frame) = self.device.try_read_frame() {
                cycle.on_frame(&frame, &self.caps);
                continue;
            }

            let now = Instant::now();
            cycle.on_idle(now);
            if cycle.is_polling() {
                let wait = cycle.remaining(now).min(self.settings.poll_interval);
                if !wait.is_zero() {
                    thread::sleep(wait);
                }
            }
        }
        cycle.finish()
    }

    /// Calls [`Joystick::listen`] until it reports nothing and returns the
    /// number of events discarded.
    pub fn flush(&mut self) -> usize {
        let mut flushed = 0;
        while self.listen().is_some() {
            flushed += 1;
        }
        log::debug!("flushed {flushed} events");
        flushed
    }

    /// Device name reported by the driver.
    pub fn name(&self) -> &str {
        &self.caps.name
    }

    pub fn axes(&self) -> &ChannelMap {
        &self.caps.axes
    }

    pub fn buttons(&self) -> &ChannelMap {
        &self.caps.buttons
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn device(&self) -> &S {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut S {
        &mut self.device
    }
}
