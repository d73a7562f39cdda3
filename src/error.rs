use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum MixerError {
    Open(Box<dyn Error + Send + Sync>),
    Attach { device: String, source: Box<dyn Error + Send + Sync> },
    Register(Box<dyn Error + Send + Sync>),
    Load(Box<dyn Error + Send + Sync>),
    ElementNotFound { device: String, element: String },
    Control { op: &'static str, source: Box<dyn Error + Send + Sync> },
    NoSavedVolume,
}

impl MixerError {
    pub fn control<E>(op: &'static str, error: E) -> MixerError
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        MixerError::Control { op, source: error.into() }
    }

    /// Whether the error happened while opening the device or looking up the element.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MixerError::Control { .. } | MixerError::NoSavedVolume)
    }
}

impl Display for MixerError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MixerError::Open(source) => write!(f, "cannot open handle to mixer device: {}", source),
            MixerError::Attach { device, source } => write!(f, "cannot attach mixer to device {}: {}", device, source),
            MixerError::Register(source) => write!(f, "cannot register simple mixer object: {}", source),
            MixerError::Load(source) => write!(f, "cannot load sound mixer: {}", source),
            MixerError::ElementNotFound { device, element } => write!(f, "could not find simple mixer element named {} on {}", element, device),
            MixerError::Control { op, source } => write!(f, "{} failed: {}", op, source),
            MixerError::NoSavedVolume => write!(f, "no saved volume to restore, mute was never called"),
        }
    }
}

impl Error for MixerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MixerError::Open(source) => Some(source.as_ref()),
            MixerError::Attach { source, .. } => Some(source.as_ref()),
            MixerError::Register(source) => Some(source.as_ref()),
            MixerError::Load(source) => Some(source.as_ref()),
            MixerError::Control { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
