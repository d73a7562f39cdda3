use log::{debug, error, trace};

use crate::channel::Channel;
use crate::control::{MixerBackend, MixerControl};
use crate::error::MixerError;
use crate::mixer_params::MixerParams;
use crate::volume::{trim_pct, DbRangeQuery, VolumeRange};

/// Percentage based volume control of one mixer element.
///
/// Fractions are in `[0, 1]`; anything outside is clamped. With `mapped` set,
/// fractions follow the element's decibel scale so that equal steps sound
/// roughly equally loud. Hardware errors while adjusting the volume are logged
/// and the operation carries on with whatever the hardware reports.
pub struct Mixer<C: MixerControl> {
    control: C,
    mute_vol: Option<i64>,
}

impl<C: MixerControl> Mixer<C> {
    pub fn new(control: C) -> Mixer<C> {
        Mixer { control, mute_vol: None }
    }

    pub fn open<B>(backend: &B, params: &MixerParams) -> Result<Mixer<C>, MixerError>
    where
        B: MixerBackend<Control = C>,
    {
        let control = backend.open(params.device(), params.element())?;
        debug!("opened element {} on {}", params.element(), params.device());

        Ok(Mixer::new(control))
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn inc_vol_pct(&mut self, pct: f32, mapped: bool, channel: Channel) -> f32 {
        let pct = trim_pct(pct);
        let cur_vol = self.get_cur_vol_pct(mapped, channel);
        self.set_vol_pct(cur_vol + pct, mapped)
    }

    pub fn dec_vol_pct(&mut self, pct: f32, mapped: bool, channel: Channel) -> f32 {
        let pct = trim_pct(pct);
        let cur_vol = self.get_cur_vol_pct(mapped, channel);
        self.set_vol_pct(cur_vol - pct, mapped)
    }

    /// Set every channel to `pct` and return the volume the hardware settled on.
    pub fn set_vol_pct(&mut self, pct: f32, mapped: bool) -> f32 {
        let pct = trim_pct(pct);

        if mapped {
            self.set_vol_mapped(pct);
        } else {
            self.set_vol_linear(pct);
        }

        self.get_cur_vol_pct(mapped, Channel::default())
    }

    pub fn get_cur_vol_pct(&self, mapped: bool, channel: Channel) -> f32 {
        if mapped {
            self.get_normalized_volume(channel)
        } else {
            self.get_vol_range()
                .map_or(0.0, |range| range.fraction_from_raw(self.get_cur_vol_raw(channel)))
        }
    }

    /// Remember the current raw volume and silence the element.
    pub fn mute(&mut self) -> f32 {
        self.mute_vol = Some(self.get_cur_vol_raw(Channel::default()));
        self.set_vol_pct(0.0, false)
    }

    /// Restore the raw volume saved by the last `mute`.
    pub fn unmute(&mut self) -> Result<f32, MixerError> {
        let mute_vol = self.mute_vol.take().ok_or(MixerError::NoSavedVolume)?;
        self.set_vol_raw(mute_vol);

        Ok(self.get_cur_vol_pct(false, Channel::default()))
    }

    pub fn saved_volume(&self) -> Option<i64> {
        self.mute_vol
    }

    fn set_vol_raw(&mut self, vol: i64) {
        trace!("setting raw volume to {}", vol);

        if let Err(err) = self.control.set_raw_all(vol) {
            error!("cannot set volume to requested value: {}", err);
        }
    }

    // Without a known range the write is skipped rather than guessed.
    fn set_vol_linear(&mut self, pct: f32) {
        if let Some(range) = self.get_vol_range() {
            self.set_vol_raw(range.raw_from_fraction(pct));
        }
    }

    fn get_cur_vol_raw(&self, channel: Channel) -> i64 {
        self.control.raw(channel).unwrap_or_else(|err| {
            error!("could not get volume for channel {}: {}", channel, err);
            0
        })
    }

    fn get_vol_range(&self) -> Option<VolumeRange> {
        match self.control.raw_range() {
            Ok((min, max)) => Some(VolumeRange::new(min, max)),
            Err(err) => {
                error!("cannot get min/max volume range: {}", err);
                None
            }
        }
    }

    fn db_range(&self) -> DbRangeQuery {
        DbRangeQuery::new(self.control.db_range(), self.control.mute_sentinel())
    }

    fn get_normalized_volume(&self, channel: Channel) -> f32 {
        let range = match self.db_range() {
            DbRangeQuery::Valid(range) => range,
            DbRangeQuery::Degenerate => return self.get_cur_vol_pct(false, Channel::default()),
            DbRangeQuery::Failed(err) => {
                debug!("no usable dB range, using raw volume: {}", err);
                return self.get_cur_vol_pct(false, Channel::default());
            }
        };

        let value = self.control.db(channel).unwrap_or_else(|err| {
            error!("could not get dB volume for channel {}: {}", channel, err);
            range.min
        });

        range.normalized_from_db(value) as f32
    }

    fn set_vol_mapped(&mut self, pct: f32) {
        if let Err(err) = self.set_normalized_volume(pct) {
            error!("cannot set volume to requested value: {}", err);
        }
    }

    fn set_normalized_volume(&mut self, pct: f32) -> Result<(), MixerError> {
        let range = match self.db_range() {
            DbRangeQuery::Valid(range) => range,
            DbRangeQuery::Degenerate | DbRangeQuery::Failed(_) => {
                self.set_vol_linear(pct);
                return Ok(());
            }
        };

        let value = range.db_from_normalized(pct as f64);
        trace!("setting volume to {} cB", value);

        self.control.set_db_all(value)
    }
}
