//! Renders the most frequent words of a text to a raster image.
//!
//! Words are placed from most to least frequent. Every word starts at the canvas center and moves outwards on
//! a spiral until it does not overlap any previously placed word. If no free position exists, the word is
//! shrunk until it reaches the minimum scale, at which point the layout is finished.

use image::{ImageFormat, Rgb, RgbImage};
use indexmap::IndexMap;
use log::{debug, info};
use std::{f32::consts::PI, path::Path};

use crate::{config::WordCloudConfig, filter::Stopwords, Error};

pub mod font;

/// Distance in pixels between two turns of the placement spiral.
const SPIRAL_SPACING: f32 = 2.;

/// A word drawn onto the cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub word: String,
    /// Frequency relative to the most frequent word.
    pub weight: f32,
    /// Left edge of the text in pixels.
    pub x: u32,
    /// Top edge of the text in pixels.
    pub y: u32,
    pub scale: u32,
    pub color: [u8; 3],
}

impl Placement {
    /// Width and height of the drawn text in pixels.
    pub fn size(&self) -> (u32, u32) {
        font::text_size(&self.word, self.scale)
    }
}

/// A rendered word cloud.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub image: RgbImage,
    pub placements: Vec<Placement>,
}

impl Cloud {
    /// Writes the image as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.image.save_with_format(path.as_ref(), ImageFormat::Png)?;
        info!("saved word cloud to {}", path.as_ref().display());
        Ok(())
    }
}

/// Tracks which pixels are taken. Queries use a summed-area table so checking a rectangle is O(1).
struct Occupancy {
    width: u32,
    height: u32,
    taken: Vec<bool>,
    integral: Vec<u32>,
}

impl Occupancy {
    fn new(width: u32, height: u32) -> Self {
        Occupancy {
            width,
            height,
            taken: vec![false; width as usize * height as usize],
            integral: vec![0; (width as usize + 1) * (height as usize + 1)],
        }
    }

    fn sum_at(&self, x: u32, y: u32) -> u32 {
        self.integral[y as usize * (self.width as usize + 1) + x as usize]
    }

    fn is_free(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let (x1, y1) = (x + width, y + height);
        self.sum_at(x1, y1) + self.sum_at(x, y) == self.sum_at(x, y1) + self.sum_at(x1, y)
    }

    fn occupy(&mut self, x: u32, y: u32, width: u32, height: u32) {
        for yy in y..(y + height).min(self.height) {
            for xx in x..(x + width).min(self.width) {
                self.taken[yy as usize * self.width as usize + xx as usize] = true;
            }
        }

        let stride = (self.width + 1) as usize;
        for yy in 0..self.height as usize {
            let mut row_sum = 0;
            for xx in 0..self.width as usize {
                row_sum += self.taken[yy * self.width as usize + xx] as u32;
                self.integral[(yy + 1) * stride + xx + 1] = self.integral[yy * stride + xx + 1] + row_sum;
            }
        }
    }

    /// First free position of a `width` x `height` box on a spiral around the center.
    fn find_position(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if width > self.width || height > self.height {
            return None;
        }

        let max_x = (self.width - width) as f32;
        let max_y = (self.height - height) as f32;
        let (center_x, center_y) = (max_x / 2., max_y / 2.);
        let max_radius = center_x.hypot(center_y) + SPIRAL_SPACING;

        let mut theta = 0f32;
        loop {
            let radius = SPIRAL_SPACING * theta / (2. * PI);
            if radius > max_radius {
                return None;
            }

            let x = (center_x + radius * theta.cos()).round();
            let y = (center_y + radius * theta.sin()).round();

            if x >= 0.
                && y >= 0.
                && x <= max_x
                && y <= max_y
                && self.is_free(x as u32, y as u32, width, height)
            {
                return Some((x as u32, y as u32));
            }

            // advance roughly one pixel along the spiral
            theta += (1. / radius.max(1.)).min(0.5);
        }
    }
}

#[derive(Debug)]
pub struct WordCloud {
    config: WordCloudConfig,
    stopwords: Stopwords,
}

impl WordCloud {
    pub fn new(config: WordCloudConfig, stopwords: Stopwords) -> Result<Self, Error> {
        config.validate()?;
        Ok(WordCloud { config, stopwords })
    }

    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    /// The `max_words` most frequent words with their frequency relative to the most frequent one.
    /// Words are lowercased, a trailing `'s` is removed and stopwords and numbers are skipped.
    pub fn frequencies(&self, text: &str) -> Vec<(String, f32)> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();

        for (start, end) in self.config.token_pattern.find_iter(text) {
            let word = text[start..end].to_lowercase();
            let word = word
                .strip_suffix("'s")
                .or_else(|| word.strip_suffix("’s"))
                .unwrap_or(&word);

            if word.is_empty()
                || word.chars().all(|c| c.is_numeric())
                || self.stopwords.contains(word)
            {
                continue;
            }

            *counts.entry(word.to_string()).or_insert(0) += 1;
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.config.max_words);

        let max_count = match counts.first() {
            Some((_, count)) => *count as f32,
            None => return Vec::new(),
        };

        counts
            .into_iter()
            .map(|(word, count)| (word, count as f32 / max_count))
            .collect()
    }

    /// Lays out and draws the words of `text`.
    pub fn generate(&self, text: &str) -> Result<Cloud, Error> {
        let frequencies = self.frequencies(text);
        if frequencies.is_empty() {
            return Err(Error::EmptyCloud);
        }

        Ok(self.generate_from_frequencies(&frequencies))
    }

    /// Lays out and draws words with the given relative frequencies, sorted in descending order.
    pub fn generate_from_frequencies(&self, frequencies: &[(String, f32)]) -> Cloud {
        let config = &self.config;
        let mut occupancy = Occupancy::new(config.width, config.height);
        let mut image = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));
        let mut placements = Vec::new();

        let rs = config.relative_scaling;
        let mut scale = config.max_scale;
        let mut last_weight = 1f32;

        for (word, weight) in frequencies {
            if *weight <= 0. {
                continue;
            }

            if rs != 0. {
                scale = ((rs * weight / last_weight + (1. - rs)) * scale as f32).round() as u32;
            }

            let position = loop {
                if scale < config.min_scale {
                    break None;
                }

                let (width, height) = font::text_size(word, scale);
                let padding = config.margin.saturating_mul(2);
                let boxed = (width.saturating_add(padding), height.saturating_add(padding));

                if let Some(position) = occupancy.find_position(boxed.0, boxed.1) {
                    occupancy.occupy(position.0, position.1, boxed.0, boxed.1);
                    break Some((position.0 + config.margin, position.1 + config.margin));
                }

                scale -= 1;
            };

            let (x, y) = match position {
                Some(position) => position,
                None => {
                    debug!("no space left for {:?}, stopping layout", word);
                    break;
                }
            };

            let color = config.palette[placements.len() % config.palette.len()];
            font::for_each_pixel(word, scale, |dx, dy| {
                let (px, py) = (x + dx, y + dy);
                if px < config.width && py < config.height {
                    image.put_pixel(px, py, Rgb(color));
                }
            });

            placements.push(Placement {
                word: word.clone(),
                weight: *weight,
                x,
                y,
                scale,
                color,
            });
            last_weight = *weight;
        }

        debug!(
            "placed {} of {} words",
            placements.len(),
            frequencies.len()
        );

        Cloud { image, placements }
    }
}
