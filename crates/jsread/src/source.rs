use crate::frame::RawFrame;

/// A stream of joystick frames that can be read without blocking.
pub trait FrameSource {
    /// Reads one frame if the source is ready right now.
    ///
    /// `None` covers both "nothing waiting" and a short read. Neither is an
    /// error for callers, they simply get no frame this pass.
    fn try_read_frame(&mut self) -> Option<RawFrame>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn try_read_frame(&mut self) -> Option<RawFrame> {
        (**self).try_read_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn try_read_frame(&mut self) -> Option<RawFrame> {
        (**self).try_read_frame()
    }
}
