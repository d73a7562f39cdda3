use std::ffi::CString;

use alsa::mixer::{MilliBel, Mixer as AlsaMixer, Selem, SelemChannelId, SelemId};
use alsa::Round;
use log::debug;

use crate::channel::Channel;
use crate::control::{MixerBackend, MixerControl};
use crate::error::MixerError;

/// Simple mixer elements of ALSA devices such as `default` or `hw:0`.
pub struct AlsaBackend;

/// Playback volume of one simple element. The device is closed on drop.
pub struct AlsaControl {
    mixer: AlsaMixer,
    selem_id: SelemId,
    element: String,
}

fn attach(device: &str) -> Result<AlsaMixer, MixerError> {
    let mut mixer = AlsaMixer::open(false).map_err(|err| MixerError::Open(Box::new(err)))?;

    let name = CString::new(device).map_err(|err| MixerError::Attach { device: device.to_owned(), source: Box::new(err) })?;
    mixer.attach(&name).map_err(|err| MixerError::Attach { device: device.to_owned(), source: Box::new(err) })?;

    Ok(mixer)
}

fn channel_id(channel: Channel) -> SelemChannelId {
    match channel {
        Channel::Mono => SelemChannelId::mono(),
        Channel::FrontLeft => SelemChannelId::FrontLeft,
        Channel::FrontRight => SelemChannelId::FrontRight,
        Channel::RearLeft => SelemChannelId::RearLeft,
        Channel::RearRight => SelemChannelId::RearRight,
        Channel::FrontCenter => SelemChannelId::FrontCenter,
        Channel::Woofer => SelemChannelId::Woofer,
        Channel::SideLeft => SelemChannelId::SideLeft,
        Channel::SideRight => SelemChannelId::SideRight,
        Channel::RearCenter => SelemChannelId::RearCenter,
    }
}

impl MixerBackend for AlsaBackend {
    type Control = AlsaControl;

    fn probe_device(&self, device: &str) -> Result<(), MixerError> {
        attach(device).map(|_mixer| ())
    }

    fn open(&self, device: &str, element: &str) -> Result<AlsaControl, MixerError> {
        let mut mixer = attach(device)?;

        Selem::register(&mut mixer).map_err(|err| MixerError::Register(Box::new(err)))?;
        mixer.load().map_err(|err| MixerError::Load(Box::new(err)))?;

        let selem_id = SelemId::new(element, 0);
        if mixer.find_selem(&selem_id).is_none() {
            return Err(MixerError::ElementNotFound { device: device.to_owned(), element: element.to_owned() });
        }

        debug!("attached to {} on {}", element, device);

        Ok(AlsaControl { mixer, selem_id, element: element.to_owned() })
    }
}

impl AlsaControl {
    fn selem(&self) -> Result<Selem, MixerError> {
        self.mixer
            .find_selem(&self.selem_id)
            .ok_or_else(|| MixerError::control("find element", format!("element {} disappeared", self.element)))
    }
}

impl MixerControl for AlsaControl {
    fn raw_range(&self) -> Result<(i64, i64), MixerError> {
        Ok(self.selem()?.get_playback_volume_range())
    }

    fn raw(&self, channel: Channel) -> Result<i64, MixerError> {
        self.selem()?
            .get_playback_volume(channel_id(channel))
            .map_err(|err| MixerError::control("get playback volume", err))
    }

    fn set_raw_all(&mut self, value: i64) -> Result<(), MixerError> {
        self.selem()?
            .set_playback_volume_all(value)
            .map_err(|err| MixerError::control("set playback volume", err))
    }

    fn db_range(&self) -> Result<(i64, i64), MixerError> {
        let (min, max) = self.selem()?.get_playback_db_range();
        Ok((min.0, max.0))
    }

    fn db(&self, channel: Channel) -> Result<i64, MixerError> {
        self.selem()?
            .get_playback_vol_db(channel_id(channel))
            .map(|value| value.0)
            .map_err(|err| MixerError::control("get playback dB", err))
    }

    fn set_db_all(&mut self, value: i64) -> Result<(), MixerError> {
        self.selem()?
            .set_playback_db_all(MilliBel(value), Round::Floor)
            .map_err(|err| MixerError::control("set playback dB", err))
    }
}
