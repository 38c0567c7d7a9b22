use jsread_bit::{Bitable, Bitmask};

/// Size of one `struct js_event` record.
pub const FRAME_SIZE: usize = 8;

/// Flags carried in the type byte of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameType {
    Button = 0x01,
    Axis = 0x02,
    /// Synthetic state report emitted when the device is opened.
    Init = 0x80,
}

impl Bitable for FrameType {
    #[inline]
    fn bit(&self) -> u8 {
        *self as u8
    }
}

/// One decoded event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame {
    /// Device timestamp in milliseconds.
    pub time: u32,
    pub value: i16,
    pub kind: Bitmask<FrameType>,
    /// Local axis or button index.
    pub number: u8,
}

impl RawFrame {
    /// Decodes a record in native byte order.
    ///
    /// Returns `None` when fewer than [`FRAME_SIZE`] bytes are available.
    /// Bytes past the first record are ignored.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let buf: &[u8; FRAME_SIZE] = buf.get(..FRAME_SIZE)?.try_into().ok()?;
        Some(Self {
            time: u32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]),
            value: i16::from_ne_bytes([buf[4], buf[5]]),
            kind: Bitmask::from_value(buf[6]),
            number: buf[7],
        })
    }

    /// Encodes the frame the way the kernel lays it out.
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        buf[..4].copy_from_slice(&self.time.to_ne_bytes());
        buf[4..6].copy_from_slice(&self.value.to_ne_bytes());
        buf[6] = self.kind.value();
        buf[7] = self.number;
        buf
    }

    #[inline]
    pub fn is_init(&self) -> bool {
        self.kind.contains(FrameType::Init)
    }

    #[inline]
    pub fn is_button(&self) -> bool {
        self.kind.contains(FrameType::Button)
    }

    #[inline]
    pub fn is_axis(&self) -> bool {
        self.kind.contains(FrameType::Axis)
    }
}
