//! Linux joystick API (`linux/joystick.h`) over a `/dev/input/js*` file.

use std::fs::{self, File};
use std::io::{self, Read};
use std::os::fd::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use crate::caps::{CapabilityQuery, MAX_AXES, MAX_BUTTONS};
use crate::error::{Error, Result};
use crate::frame::{RawFrame, FRAME_SIZE};
use crate::settings::Settings;
use crate::source::FrameSource;

/// Buffer length used for the device name.
const NAME_LEN: usize = 64;

// Request codes are part of the kernel ABI and must not change.
const JSIOCGAXES: u32 = 0x8001_6a11;
const JSIOCGBUTTONS: u32 = 0x8001_6a12;
const JSIOCGAXMAP: u32 = 0x8040_6a32;
const JSIOCGBTNMAP: u32 = 0x8040_6a34;

/// `JSIOCGNAME(len)`: the name request encodes the buffer length.
const fn jsiocgname(len: usize) -> u32 {
    0x8000_6a13 + 0x1_0000 * len as u32
}

/// Lists the device files in `dir` whose names start with `prefix`, in
/// lexical order.
pub fn list_devices(dir: &Path, prefix: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    Ok(names)
}

/// Picks a device among `candidates`.
///
/// `selector` may be a bare file name or the full path inside `dir`. When it
/// matches nothing, or is absent, the first candidate wins.
pub fn select_device<'a>(
    candidates: &'a [String],
    dir: &Path,
    selector: Option<&str>,
) -> Option<&'a str> {
    if let Some(selector) = selector {
        let matched = candidates
            .iter()
            .find(|name| *name == selector || dir.join(name) == Path::new(selector));
        if let Some(name) = matched {
            return Some(name.as_str());
        }
        log::warn!("no device matches {selector:?}, falling back to the first one");
    }
    candidates.first().map(String::as_str)
}

/// An open joystick device file.
#[derive(Debug)]
pub struct JsDevice {
    path: PathBuf,
    file: File,
}

impl JsDevice {
    /// Enumerates the configured directory and opens the selected device.
    pub fn open(settings: &Settings) -> Result<Self> {
        let candidates = list_devices(&settings.dir, &settings.prefix)?;
        let name = select_device(&candidates, &settings.dir, settings.device.as_deref())
            .ok_or_else(|| Error::NoDevice {
                dir: settings.dir.clone(),
            })?;
        Self::open_path(settings.dir.join(name))
    }

    /// Opens a device file directly, skipping enumeration.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        log::debug!("opened {}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Zero-wait readiness check.
    fn is_ready(&self) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: self.fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        // SAFETY: `fds` is a single valid pollfd and outlives the call.
        let ret = unsafe { libc::poll(&mut fds, 1, 0) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        // Hang-ups and errors count as ready so the read surfaces them.
        Ok(ret > 0 && fds.revents & (libc::POLLIN | libc::POLLHUP | libc::POLLERR) != 0)
    }

    fn fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    /// Issues a read-type ioctl into `buf`.
    fn ioctl<T>(&self, request: u32, buf: &mut T) -> io::Result<()> {
        // SAFETY: every request used here writes at most `size_of::<T>()`
        // bytes, which `buf` provides.
        let ret = unsafe { libc::ioctl(self.fd(), request as _, std::ptr::from_mut(buf)) };
        if ret < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

impl CapabilityQuery for JsDevice {
    fn device_name(&self) -> io::Result<String> {
        let mut buf = [0u8; NAME_LEN];
        self.ioctl(jsiocgname(NAME_LEN), &mut buf)?;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }

    fn axis_count(&self) -> io::Result<u8> {
        let mut count = 0u8;
        self.ioctl(JSIOCGAXES, &mut count)?;
        Ok(count)
    }

    fn button_count(&self) -> io::Result<u8> {
        let mut count = 0u8;
        self.ioctl(JSIOCGBUTTONS, &mut count)?;
        Ok(count)
    }

    fn axis_map(&self) -> io::Result<[u8; MAX_AXES]> {
        let mut map = [0u8; MAX_AXES];
        self.ioctl(JSIOCGAXMAP, &mut map)?;
        Ok(map)
    }

    fn button_map(&self) -> io::Result<[u16; MAX_BUTTONS]> {
        let mut map = [0u16; MAX_BUTTONS];
        self.ioctl(JSIOCGBTNMAP, &mut map)?;
        Ok(map)
    }
}

impl FrameSource for JsDevice {
    fn try_read_frame(&mut self) -> Option<RawFrame> {
        match self.is_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                log::trace!("poll on {} failed: {e}", self.path.display());
                return None;
            }
        }

        let mut buf = [0u8; FRAME_SIZE];
        match self.file.read(&mut buf) {
            Ok(n) if n == FRAME_SIZE => RawFrame::decode(&buf),
            Ok(n) => {
                log::trace!("short read of {n} bytes from {}", self.path.display());
                None
            }
            Err(e) => {
                log::trace!("read from {} failed: {e}", self.path.display());
                None
            }
        }
    }
}
