use crate::source::FrameSource;

/// Discards the synthetic state reports the kernel queues when a device is
/// opened.
///
/// Stops on the first frame without the init flag, which is dropped as well,
/// or as soon as the source has nothing waiting. Returns the number of frames
/// consumed.
pub fn drain_initial_state<S: FrameSource + ?Sized>(source: &mut S) -> usize {
    let mut consumed = 0;
    while let Some(frame) = source.try_read_frame() {
        consumed += 1;
        if !frame.is_init() {
            break;
        }
    }
    log::debug!("drained {consumed} initial frames");
    consumed
}
