use crate::channel::{extract, Channel};
use image::RgbaImage;
use rayon::prelude::*;

/// One single-channel image for every [`Channel`].
#[derive(Clone, Debug)]
pub struct ChannelMaps {
    maps: [RgbaImage; 4],
}

impl ChannelMaps {
    pub fn get(&self, channel: Channel) -> &RgbaImage {
        &self.maps[channel.index()]
    }

    #[cfg(test)]
    pub fn get_mut(&mut self, channel: Channel) -> &mut RgbaImage {
        &mut self.maps[channel.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &RgbaImage)> {
        Channel::ALL.into_iter().zip(self.maps.iter())
    }
}

/// Remaps every pixel of `image` through [`extract`], leaving the source untouched.
pub fn split_channel(image: &RgbaImage, channel: Channel) -> RgbaImage {
    let mut output = RgbaImage::new(image.width(), image.height());

    (&mut *output)
        .par_chunks_exact_mut(4)
        .zip(image.par_chunks_exact(4))
        .for_each(|(dest, src)| {
            let pixel = extract(image::Rgba([src[0], src[1], src[2], src[3]]), channel);
            dest.copy_from_slice(&pixel.0);
        });

    output
}

pub fn split(image: &RgbaImage) -> ChannelMaps {
    let ((r, g), (b, a)) = rayon::join(
        || {
            rayon::join(
                || split_channel(image, Channel::R),
                || split_channel(image, Channel::G),
            )
        },
        || {
            rayon::join(
                || split_channel(image, Channel::B),
                || split_channel(image, Channel::A),
            )
        },
    );

    ChannelMaps {
        maps: [r, g, b, a],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> RgbaImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, image::Rgba([10, 20, 30, 40]));
        image.put_pixel(1, 0, image::Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 1, image::Rgba([0, 255, 0, 128]));
        image.put_pixel(1, 1, image::Rgba([0, 0, 255, 0]));
        image
    }

    fn grays(image: &RgbaImage) -> Vec<[u8; 4]> {
        image.pixels().map(|p| p.0).collect()
    }

    #[test]
    fn splits_two_by_two() {
        let maps = split(&two_by_two());

        assert_eq!(
            grays(maps.get(Channel::R)),
            [[10, 10, 10, 255], [255, 255, 255, 255], [0, 0, 0, 255], [0, 0, 0, 255]]
        );
        assert_eq!(
            grays(maps.get(Channel::G)),
            [[20, 20, 20, 255], [0, 0, 0, 255], [255, 255, 255, 255], [0, 0, 0, 255]]
        );
        assert_eq!(
            grays(maps.get(Channel::B)),
            [[30, 30, 30, 255], [0, 0, 0, 255], [0, 0, 0, 255], [255, 255, 255, 255]]
        );
        assert_eq!(
            grays(maps.get(Channel::A)),
            [[40, 40, 40, 255], [255, 255, 255, 255], [128, 128, 128, 255], [0, 0, 0, 255]]
        );
    }

    #[test]
    fn outputs_match_source_dimensions() {
        for (width, height) in [(0, 0), (1, 1), (7, 3), (64, 33)] {
            let source = RgbaImage::from_fn(width, height, |x, y| {
                image::Rgba([x as u8, y as u8, (x ^ y) as u8, (x + y) as u8])
            });
            let maps = split(&source);

            assert_eq!(maps.iter().count(), 4);
            for (_, map) in maps.iter() {
                assert_eq!(map.dimensions(), source.dimensions());
                assert!(map.pixels().all(|p| p[0] == p[1] && p[1] == p[2] && p[3] == 255));
            }
        }
    }

    #[test]
    fn split_channel_matches_split() {
        let source = two_by_two();
        let maps = split(&source);

        for channel in Channel::ALL {
            assert_eq!(&split_channel(&source, channel), maps.get(channel));
        }
    }

    #[test]
    fn outputs_are_independent() {
        let source = two_by_two();
        let mut maps = split(&source);

        maps.get_mut(Channel::R).put_pixel(0, 0, image::Rgba([1, 2, 3, 4]));

        assert_eq!(source.get_pixel(0, 0).0, [10, 20, 30, 40]);
        assert_eq!(maps.get(Channel::G).get_pixel(0, 0).0, [20, 20, 20, 255]);
        assert_eq!(maps.get(Channel::R).get_pixel(0, 0).0, [1, 2, 3, 4]);
    }
}
