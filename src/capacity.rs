use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegoError;
use image::RgbImage;

pub fn capacity(grid: &RgbImage) -> usize {
    grid.width() as usize * grid.height() as usize * CHANNELS_PER_PIXEL
}

pub fn validate(grid: &RgbImage, required_bits: usize) -> Result<(), StegoError> {
    let available = capacity(grid);
    if required_bits > available {
        return Err(StegoError::CapacityExceeded {
            required: required_bits,
            available,
        });
    }

    Ok(())
}
