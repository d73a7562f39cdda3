use log::debug;

use crate::channel::Channel;
use crate::error::MixerError;

/// Decibel value that hardware reports as its minimum when the minimum means silence.
pub const DB_GAIN_MUTE: i64 = -9_999_999;

/// Playback volume of a single simple mixer element.
///
/// Decibel values are in centibels (hundredths of a dB).
pub trait MixerControl {
    fn raw_range(&self) -> Result<(i64, i64), MixerError>;
    fn raw(&self, channel: Channel) -> Result<i64, MixerError>;
    fn set_raw_all(&mut self, value: i64) -> Result<(), MixerError>;

    fn db_range(&self) -> Result<(i64, i64), MixerError>;
    fn db(&self, channel: Channel) -> Result<i64, MixerError>;
    fn set_db_all(&mut self, value: i64) -> Result<(), MixerError>;

    fn mute_sentinel(&self) -> i64 {
        DB_GAIN_MUTE
    }
}

/// Opens mixer devices and the elements on them.
pub trait MixerBackend {
    type Control: MixerControl;

    /// Check that `device` can be opened and attached; the handle is released before returning.
    fn probe_device(&self, device: &str) -> Result<(), MixerError>;

    fn open(&self, device: &str, element: &str) -> Result<Self::Control, MixerError>;
}

pub fn device_exists<B: MixerBackend>(backend: &B, device: &str) -> bool {
    match backend.probe_device(device) {
        Ok(()) => true,
        Err(err) => {
            debug!("device {} not available: {}", device, err);
            false
        }
    }
}

pub fn element_exists<B: MixerBackend>(backend: &B, device: &str, element: &str) -> bool {
    match backend.open(device, element) {
        Ok(_control) => true,
        Err(err) => {
            debug!("element {} on {} not available: {}", element, device, err);
            false
        }
    }
}


#[cfg(test)]
mod test {
    use super::mock::MockBackend;
    use super::{device_exists, element_exists};

    fn backend() -> MockBackend {
        MockBackend::new(vec![("default", vec!["Master", "PCM"]), ("hw:1", vec![])])
    }

    #[test]
    fn test_device_exists() {
        let backend = backend();

        assert!(device_exists(&backend, "default"));
        assert!(device_exists(&backend, "hw:1"));
        assert!(!device_exists(&backend, "hw:7"));
    }

    #[test]
    fn test_element_exists_releases_handle() {
        let backend = backend();

        assert!(element_exists(&backend, "default", "Master"));
        assert_eq!(backend.open_handles.get(), 0);

        assert!(!element_exists(&backend, "default", "Headphone"));
        assert!(!element_exists(&backend, "hw:1", "Master"));
        assert!(!element_exists(&backend, "hw:7", "Master"));
        assert_eq!(backend.open_handles.get(), 0);
    }
}
