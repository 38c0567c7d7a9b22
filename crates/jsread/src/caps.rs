use std::io;
use std::ops::Index;

use crate::error::{Error, Result};
use crate::tables::{axis_name, button_name};

/// Entries in the driver's axis code map (`ABS_CNT`).
pub const MAX_AXES: usize = 64;
/// Entries in the driver's button code map.
pub const MAX_BUTTONS: usize = 200;

/// Capability requests understood by a joystick driver.
pub trait CapabilityQuery {
    fn device_name(&self) -> io::Result<String>;
    fn axis_count(&self) -> io::Result<u8>;
    fn button_count(&self) -> io::Result<u8>;
    /// Raw axis code for each local axis index.
    fn axis_map(&self) -> io::Result<[u8; MAX_AXES]>;
    /// Raw button code for each local button index.
    fn button_map(&self) -> io::Result<[u16; MAX_BUTTONS]>;
}

/// Channel names indexed by the device's local axis or button index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap(Box<[Box<str>]>);

impl ChannelMap {
    fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Name of the channel at `index`, if the device has it.
    #[inline]
    pub fn get(&self, index: u8) -> Option<&str> {
        self.0.get(usize::from(index)).map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }
}

impl Index<usize> for ChannelMap {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

/// Everything the driver reports about a device, resolved once at open time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub name: String,
    pub axes: ChannelMap,
    pub buttons: ChannelMap,
}

impl Capabilities {
    /// Queries the driver and builds both channel maps.
    ///
    /// Unrecognised codes get placeholder names, so the maps always cover
    /// every index the device reports.
    pub fn resolve<Q: CapabilityQuery + ?Sized>(device: &Q) -> Result<Self> {
        let name = device.device_name().map_err(query("JSIOCGNAME"))?;
        let num_axes = device.axis_count().map_err(query("JSIOCGAXES"))?;
        let num_buttons = device.button_count().map_err(query("JSIOCGBUTTONS"))?;
        let axis_codes = device.axis_map().map_err(query("JSIOCGAXMAP"))?;
        let button_codes = device.button_map().map_err(query("JSIOCGBTNMAP"))?;

        let axes = ChannelMap::from_names(
            axis_codes
                .iter()
                .take(usize::from(num_axes))
                .map(|&code| axis_name(code)),
        );
        let buttons = ChannelMap::from_names(
            button_codes
                .iter()
                .take(usize::from(num_buttons))
                .map(|&code| button_name(code)),
        );

        log::debug!(
            "resolved {name:?}: {} axes, {} buttons",
            axes.len(),
            buttons.len()
        );

        Ok(Self {
            name,
            axes,
            buttons,
        })
    }
}

fn query(request: &'static str) -> impl FnOnce(io::Error) -> Error {
    move |source| Error::Query { request, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDevice;

    #[test]
    fn resolves_maps_in_local_index_order() {
        let device = FakeDevice::new("Test Pad", &[0x01, 0x00, 0x10], &[0x131, 0x130]);
        let caps = Capabilities::resolve(&device).unwrap();

        assert_eq!(caps.name, "Test Pad");
        assert_eq!(caps.axes.iter().collect::<Vec<_>>(), ["y", "x", "hat0x"]);
        assert_eq!(caps.buttons.iter().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(caps.axes.get(2), Some("hat0x"));
        assert_eq!(caps.axes.get(3), None);
        assert_eq!(&caps.buttons[1], "a");
    }

    #[test]
    fn unknown_codes_keep_indices_stable() {
        let device = FakeDevice::new("Odd", &[0x0c, 0x01], &[0x130, 0x2ff, 0x131]);
        let caps = Capabilities::resolve(&device).unwrap();

        assert_eq!(caps.axes.get(0), Some("unknown(0x0c)"));
        assert_eq!(caps.axes.get(1), Some("y"));
        assert_eq!(caps.buttons.len(), 3);
        assert_eq!(caps.buttons.get(1), Some("unknown(0x2ff)"));
        assert_eq!(caps.buttons.get(2), Some("b"));
    }

    #[test]
    fn counts_truncate_code_maps() {
        // The driver fills the whole map, only the first `count` entries count.
        let device = FakeDevice::new("Pad", &[0x00, 0x01], &[0x130])
            .with_counts(1, 0);
        let caps = Capabilities::resolve(&device).unwrap();

        assert_eq!(caps.axes.len(), 1);
        assert!(caps.buttons.is_empty());
    }

    #[test]
    fn failed_query_names_the_request() {
        let device = FakeDevice::new("Pad", &[], &[]).failing_queries();
        let err = Capabilities::resolve(&device).unwrap_err();
        assert!(matches!(err, Error::Query { request: "JSIOCGNAME", .. }));
    }
}
