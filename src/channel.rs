use std::fmt;

pub type Pixel = image::Rgba<u8>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Byte offset of this channel inside an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::A => "A",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a pixel to an opaque gray pixel holding the magnitude of `channel`.
pub fn extract(pixel: Pixel, channel: Channel) -> Pixel {
    let value = pixel.0[channel.index()];
    image::Rgba([value, value, value, u8::MAX])
}
