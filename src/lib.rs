#[cfg(feature = "alsa")]
mod alsa_backend;
mod channel;
mod control;
mod error;
mod mixer;
mod mixer_params;
mod volume;

#[cfg(feature = "alsa")]
pub use crate::alsa_backend::{AlsaBackend, AlsaControl};
pub use crate::channel::{Channel, ParseChannelError};
pub use crate::control::{device_exists, element_exists, MixerBackend, MixerControl, DB_GAIN_MUTE};
pub use crate::error::MixerError;
pub use crate::mixer::Mixer;
pub use crate::mixer_params::MixerParams;
pub use crate::volume::{trim_pct, DbRange, DbRangeQuery, VolumeRange, MAX_LINEAR_DB_SCALE};
