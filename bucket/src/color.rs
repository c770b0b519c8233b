//! RGB color type with 8-bit channels.

use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::error::{Error, Result};

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Immutable RGB triple. Equality is componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    /// Creates a color from channel values, failing if any lies outside `0..=255`.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self> {
        Ok(Self {
            red: checked_channel(Channel::Red, red)?,
            green: checked_channel(Channel::Green, green)?,
            blue: checked_channel(Channel::Blue, blue)?,
        })
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Samples each channel independently and uniformly from `0..255`.
    ///
    /// 255 is excluded, so the result is never [`Color::WHITE`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.random_range(0..255),
            green: rng.random_range(0..255),
            blue: rng.random_range(0..255),
        }
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    #[inline]
    pub fn is_white(&self) -> bool {
        *self == Self::WHITE
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }

    /// RGB followed by an opaque alpha channel.
    #[inline]
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

fn checked_channel(channel: Channel, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidColorChannel { channel, value })
}

impl TryFrom<[i32; 3]> for Color {
    type Error = Error;

    fn try_from([red, green, blue]: [i32; 3]) -> Result<Self> {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}
