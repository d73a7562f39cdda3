use crate::channel::Channel;

pub struct MixerParams {
    pub(super) device: String,
    pub(super) element: String,
    pub(super) channel: Channel,
}

impl Default for MixerParams {
    fn default() -> Self {
        MixerParams {
            device: String::from("default"),
            element: String::from("Master"),
            channel: Channel::Mono,
        }
    }
}

impl MixerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn set_device(&mut self, device: String) {
        self.device = device;
    }

    pub fn set_element(&mut self, element: String) {
        self.element = element;
    }

    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }
}
