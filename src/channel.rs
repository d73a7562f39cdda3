use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Channel of a simple mixer element.
///
/// `Mono` addresses the same hardware channel as `FrontLeft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Mono,
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
    FrontCenter,
    Woofer,
    SideLeft,
    SideRight,
    RearCenter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseChannelError {
    UnknownChannel(String),
}

impl Default for Channel {
    fn default() -> Self {
        Channel::Mono
    }
}

impl Channel {
    fn name(self) -> &'static str {
        match self {
            Channel::Mono => "mono",
            Channel::FrontLeft => "front-left",
            Channel::FrontRight => "front-right",
            Channel::RearLeft => "rear-left",
            Channel::RearRight => "rear-right",
            Channel::FrontCenter => "front-center",
            Channel::Woofer => "woofer",
            Channel::SideLeft => "side-left",
            Channel::SideRight => "side-right",
            Channel::RearCenter => "rear-center",
        }
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mono" => Ok(Channel::Mono),
            "front-left" => Ok(Channel::FrontLeft),
            "front-right" => Ok(Channel::FrontRight),
            "rear-left" => Ok(Channel::RearLeft),
            "rear-right" => Ok(Channel::RearRight),
            "front-center" => Ok(Channel::FrontCenter),
            "woofer" => Ok(Channel::Woofer),
            "side-left" => Ok(Channel::SideLeft),
            "side-right" => Ok(Channel::SideRight),
            "rear-center" => Ok(Channel::RearCenter),
            _ => Err(ParseChannelError::UnknownChannel(s.to_owned())),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for ParseChannelError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseChannelError::UnknownChannel(name) => write!(f, "unknown channel {}", name),
        }
    }
}

impl std::error::Error for ParseChannelError {}

#[cfg(test)]
mod test {
    use super::{Channel, ParseChannelError};

    #[test]
    fn test_default_is_mono() {
        assert_eq!(Channel::default(), Channel::Mono);
    }

    #[test]
    fn test_parse_names() {
        for channel in &[Channel::Mono, Channel::FrontRight, Channel::SideLeft, Channel::RearCenter] {
            assert_eq!(channel.to_string().parse::<Channel>(), Ok(*channel));
        }

        assert_eq!("Front-Left".parse::<Channel>(), Ok(Channel::FrontLeft));
        assert_eq!("center".parse::<Channel>(), Err(ParseChannelError::UnknownChannel(String::from("center"))));
    }
}
