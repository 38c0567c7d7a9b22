use std::io;
use std::time::Duration;

use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use jsread::{
    CapabilityQuery, FrameSource, FrameType, Joystick, RawFrame, Settings, MAX_AXES,
    MAX_BUTTONS,
};
use jsread_bit::Bitmask;

/// Replays a burst of axis frames followed by one idle pass, forever.
struct Burst {
    frames: Vec<RawFrame>,
    pos: usize,
}

impl Burst {
    fn new(len: usize) -> Self {
        let frames = (0..len)
            .map(|i| RawFrame {
                time: i as u32,
                value: (i as i16).wrapping_mul(97),
                kind: Bitmask::new(&[FrameType::Axis]),
                number: (i % 4) as u8,
            })
            .collect();
        Self { frames, pos: 0 }
    }
}

impl FrameSource for Burst {
    fn try_read_frame(&mut self) -> Option<RawFrame> {
        let frame = self.frames.get(self.pos).copied();
        self.pos = if frame.is_some() { self.pos + 1 } else { 0 };
        frame
    }
}

impl CapabilityQuery for Burst {
    fn device_name(&self) -> io::Result<String> {
        Ok("bench".to_owned())
    }

    fn axis_count(&self) -> io::Result<u8> {
        Ok(4)
    }

    fn button_count(&self) -> io::Result<u8> {
        Ok(2)
    }

    fn axis_map(&self) -> io::Result<[u8; MAX_AXES]> {
        let mut map = [0u8; MAX_AXES];
        map[..4].copy_from_slice(&[0x00, 0x01, 0x03, 0x04]);
        Ok(map)
    }

    fn button_map(&self) -> io::Result<[u16; MAX_BUTTONS]> {
        let mut map = [0u16; MAX_BUTTONS];
        map[..2].copy_from_slice(&[0x130, 0x131]);
        Ok(map)
    }
}

pub fn bench_decode(c: &mut Criterion) {
    let bytes = Burst::new(1).frames[0].encode();
    c.bench_function("frame_decode", |b| {
        b.iter(|| RawFrame::decode(black_box(&bytes)));
    });
}

pub fn bench_listen(c: &mut Criterion) {
    let settings = Settings::default().with_timeout(Duration::from_millis(100));
    let mut js = Joystick::new(Burst::new(64), settings).expect("bench source resolves");

    c.bench_function("listen_burst_64", |b| {
        b.iter(|| black_box(js.listen()));
    });
}

criterion_group!(benches, bench_decode, bench_listen);
criterion_main!(benches);
