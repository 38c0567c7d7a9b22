//! Scripted stand-in for a joystick device.

use std::collections::VecDeque;
use std::io;

use jsread_bit::Bitmask;

use crate::caps::{CapabilityQuery, MAX_AXES, MAX_BUTTONS};
use crate::frame::{FrameType, RawFrame};
use crate::source::FrameSource;

/// One poll pass as seen by the reader.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Script {
    /// The device is ready and delivers a full frame.
    Ready(RawFrame),
    /// The device is ready but the read comes back short.
    Short,
    /// Nothing is waiting.
    Idle,
}

#[derive(Debug, Default)]
pub(crate) struct FakeDevice {
    name: String,
    axis_codes: Vec<u8>,
    button_codes: Vec<u16>,
    counts: Option<(u8, u8)>,
    failing: bool,
    script: VecDeque<Script>,
    reads: usize,
}

impl FakeDevice {
    pub(crate) fn new(name: &str, axis_codes: &[u8], button_codes: &[u16]) -> Self {
        Self {
            name: name.to_owned(),
            axis_codes: axis_codes.to_vec(),
            button_codes: button_codes.to_vec(),
            ..Self::default()
        }
    }

    /// Overrides the reported axis and button counts.
    pub(crate) fn with_counts(mut self, axes: u8, buttons: u8) -> Self {
        self.counts = Some((axes, buttons));
        self
    }

    pub(crate) fn failing_queries(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Appends poll passes to the script. Once it runs out the device is idle.
    pub(crate) fn script(mut self, steps: impl IntoIterator<Item = Script>) -> Self {
        self.script.extend(steps);
        self
    }

    pub(crate) fn push(&mut self, step: Script) {
        self.script.push_back(step);
    }

    pub(crate) fn pending(&self) -> usize {
        self.script.len()
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    /// Number of read attempts, idle ones included.
    pub(crate) fn reads(&self) -> usize {
        self.reads
    }

    fn check(&self) -> io::Result<()> {
        if self.failing {
            Err(io::Error::from_raw_os_error(libc::ENOTTY))
        } else {
            Ok(())
        }
    }
}

impl CapabilityQuery for FakeDevice {
    fn device_name(&self) -> io::Result<String> {
        self.check()?;
        Ok(self.name.clone())
    }

    fn axis_count(&self) -> io::Result<u8> {
        self.check()?;
        Ok(self
            .counts
            .map_or(self.axis_codes.len() as u8, |(axes, _)| axes))
    }

    fn button_count(&self) -> io::Result<u8> {
        self.check()?;
        Ok(self
            .counts
            .map_or(self.button_codes.len() as u8, |(_, buttons)| buttons))
    }

    fn axis_map(&self) -> io::Result<[u8; MAX_AXES]> {
        self.check()?;
        let mut map = [0u8; MAX_AXES];
        map[..self.axis_codes.len()].copy_from_slice(&self.axis_codes);
        Ok(map)
    }

    fn button_map(&self) -> io::Result<[u16; MAX_BUTTONS]> {
        self.check()?;
        let mut map = [0u16; MAX_BUTTONS];
        map[..self.button_codes.len()].copy_from_slice(&self.button_codes);
        Ok(map)
    }
}

impl FrameSource for FakeDevice {
    fn try_read_frame(&mut self) -> Option<RawFrame> {
        self.reads += 1;
        match self.script.pop_front()? {
            Script::Ready(frame) => RawFrame::decode(&frame.encode()),
            Script::Short => RawFrame::decode(&[0; 4]),
            Script::Idle => None,
        }
    }
}

pub(crate) fn axis(number: u8, value: i16) -> RawFrame {
    RawFrame {
        time: 0,
        value,
        kind: Bitmask::new(&[FrameType::Axis]),
        number,
    }
}

pub(crate) fn button(number: u8, value: i16) -> RawFrame {
    RawFrame {
        time: 0,
        value,
        kind: Bitmask::new(&[FrameType::Button]),
        number,
    }
}

/// Marks a frame as a synthetic state report.
pub(crate) fn init(mut frame: RawFrame) -> RawFrame {
    frame.kind.insert(FrameType::Init);
    frame
}
