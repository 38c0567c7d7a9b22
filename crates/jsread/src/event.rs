use std::fmt;

use crate::caps::Capabilities;
use crate::frame::RawFrame;

/// Divisor that maps a raw axis reading onto `[-1.0, 1.0]`.
const AXIS_SCALE: f32 = i16::MAX as f32;

/// Normalized reading of a single channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Button state. The polarity is inverted: a pressed button (non-zero
    /// raw value) reads `0`, a released one reads `1`. Consumers depend on
    /// this, so it is kept as reported.
    Button(u8),
    /// Axis position in `[-1.0, 1.0]`, computed as `raw / 32767` in `f32`.
    /// The quotient is exact to `f32` precision, not to `f64`.
    Axis(f32),
}

impl Value {
    /// Button value for a raw driver reading.
    #[inline]
    pub fn button(raw: i16) -> Self {
        Value::Button(u8::from(raw == 0))
    }

    /// Axis value for a raw driver reading.
    ///
    /// `i16::MIN` would land just below `-1.0` and is clamped.
    #[inline]
    pub fn axis(raw: i16) -> Self {
        Value::Axis((f32::from(raw) / AXIS_SCALE).max(-1.0))
    }

    /// The value as a float, whatever the channel kind.
    pub fn as_f32(&self) -> f32 {
        match *self {
            Value::Button(v) => f32::from(v),
            Value::Axis(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Button(v) => write!(f, "{v}"),
            Value::Axis(v) => write!(f, "{v:.4}"),
        }
    }
}

/// A named channel together with its latest value.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub channel: Box<str>,
    pub value: Value,
}

impl Event {
    /// Normalizes a live frame against the device's channel maps.
    ///
    /// Returns `None` for frames that are neither button nor axis events,
    /// and for indices the device never reported.
    pub(crate) fn from_frame(frame: &RawFrame, caps: &Capabilities) -> Option<Self> {
        let (channel, value) = if frame.is_button() {
            (caps.buttons.get(frame.number)?, Value::button(frame.value))
        } else if frame.is_axis() {
            (caps.axes.get(frame.number)?, Value::axis(frame.value))
        } else {
            return None;
        };
        Some(Self {
            channel: channel.into(),
            value,
        })
    }

    pub fn is_button(&self) -> bool {
        matches!(self.value, Value::Button(_))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.channel, self.value)
    }
}
