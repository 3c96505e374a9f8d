//! Background images: the record shape returned by the image service and the
//! random choice that assigns one to a rectangle.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One image record from the image service. Other fields are ignored.
///
/// A record without a usable `url` (missing, `null`, or an entry that was not
/// an object at all) still counts for the random pick and yields no image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub url: Option<String>,
}

/// Choose one record uniformly at random and return its URL.
///
/// Returns `None` for an empty list or a record without a URL; the
/// rectangle then renders without a background image.
pub fn pick_url<R: Rng + ?Sized>(records: &[ImageRecord], rng: &mut R) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let record = &records[rng.random_range(0..records.len())];
    record.url.as_deref().filter(|url| !url.is_empty()).map(str::to_string)
}
