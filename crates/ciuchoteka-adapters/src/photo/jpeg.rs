//! JPEG photo compressor.
//!
//! Decodes any supported source format, scales it down to the profile's
//! bounding box, then re-encodes as JPEG, lowering quality step by step until
//! the payload fits [`PhotoProfile::MAX_ENCODED_BYTES`] or the floor is hit.

use std::{fs, path::Path};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use ciuchoteka_core::{
    application::{ApplicationError, ports::ImageCompressor},
    domain::PhotoProfile,
    error::CiuchotekaResult,
};
use image::{DynamicImage, codecs::jpeg::JpegEncoder, imageops::FilterType};
use tracing::{debug, instrument};

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";
const QUALITY_STEP: u8 = 10;
const QUALITY_FLOOR: u8 = 10;

/// Encodes photos as `data:image/jpeg;base64,` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCompressor;

impl JpegCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCompressor for JpegCompressor {
    #[instrument(skip_all, fields(path = %source.display(), %profile))]
    fn compress(&self, source: &Path, profile: PhotoProfile) -> CiuchotekaResult<String> {
        let failed = |reason: String| ApplicationError::ImageProcessing {
            path: source.to_path_buf(),
            reason,
        };

        let bytes = fs::read(source).map_err(|e| failed(format!("failed to read file: {e}")))?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| failed(format!("unsupported or corrupt image: {e}")))?;

        let (jpeg, quality) =
            encode_within(&image, profile).map_err(|e| failed(format!("encoding failed: {e}")))?;
        debug!(
            source_bytes = bytes.len(),
            encoded_bytes = jpeg.len(),
            quality,
            "Photo compressed"
        );

        Ok(format!("{DATA_URL_PREFIX}{}", BASE64.encode(&jpeg)))
    }
}

/// Scale and encode `image` for `profile`. Returns the JPEG bytes and the
/// quality that produced them.
fn encode_within(
    image: &DynamicImage,
    profile: PhotoProfile,
) -> Result<(Vec<u8>, u8), image::ImageError> {
    let max = profile.max_dimension();
    let scaled = if image.width() > max || image.height() > max {
        image.resize(max, max, FilterType::Lanczos3)
    } else {
        image.clone()
    };
    let rgb = scaled.to_rgb8();

    let mut quality = PhotoProfile::INITIAL_QUALITY;
    loop {
        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, quality).encode_image(&rgb)?;

        if buf.len() <= PhotoProfile::MAX_ENCODED_BYTES || quality <= QUALITY_FLOOR {
            return Ok((buf, quality));
        }
        quality = quality.saturating_sub(QUALITY_STEP).max(QUALITY_FLOOR);
    }
}
