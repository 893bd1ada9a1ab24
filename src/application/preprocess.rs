// Image preprocessing - crop the plot area, drop axis ink, reinforce the trace
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::contours::{BorderType, find_contours};

use crate::error::DigitizerError;

// Fixed plot-area margins of the CFT chart rendering, in pixels.
const TOP_MARGIN: u32 = 31;
const LEFT_MARGIN: u32 = 71;
const BOTTOM_MARGIN: u32 = 200;
const RIGHT_MARGIN: u32 = 60;

// Axis and gridline ink is near-gray: low saturation, low-to-mid value.
const GRAY_SATURATION_MAX: u8 = 200;
const GRAY_VALUE_MAX: u8 = 200;

// The trace hue band (blue), on the half-degree hue scale H in [0, 180).
const BLUE_HUE_MIN: u8 = 110;
const BLUE_HUE_MAX: u8 = 130;
const BLUE_SATURATION_MIN: u8 = 50;
const BLUE_VALUE_MIN: u8 = 50;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Turns raw encoded chart bytes into the cropped, noise-suppressed bitmap
/// the curve tracer runs on. `hours` is how much of the rendered two-day
/// chart to keep, counted from its left edge.
pub fn prepare_plot_image(raw_image: &[u8], hours: f64) -> Result<RgbImage, DigitizerError> {
    let decoded = image::load_from_memory(raw_image)
        .map_err(|e| DigitizerError::ImageFormat(format!("failed to decode chart image: {e}")))?;
    let mut plot = crop_plot_area(&decoded.to_rgb8(), hours)?;
    suppress_axis_ink(&mut plot);
    reinforce_trace(&mut plot);
    Ok(plot)
}

/// Crops to the plot area inside the fixed chart margins. The two rendered
/// days span the full inner width, so keeping `hours` of the chart keeps
/// `inner_width / 2 * hours / 24` columns.
fn crop_plot_area(image: &RgbImage, hours: f64) -> Result<RgbImage, DigitizerError> {
    let (width, height) = image.dimensions();
    if height <= TOP_MARGIN + BOTTOM_MARGIN {
        return Err(DigitizerError::ImageFormat(format!(
            "chart height {height}px does not fit the {}px plot margins",
            TOP_MARGIN + BOTTOM_MARGIN
        )));
    }
    if width <= LEFT_MARGIN + RIGHT_MARGIN {
        return Err(DigitizerError::ImageFormat(format!(
            "chart width {width}px does not fit the {}px plot margins",
            LEFT_MARGIN + RIGHT_MARGIN
        )));
    }

    let inner_width = (width - LEFT_MARGIN - RIGHT_MARGIN) as f64;
    let crop_width = (inner_width / 2.0 * hours / 24.0) as u32;
    if crop_width == 0 {
        return Err(DigitizerError::ImageFormat(format!(
            "chart width {width}px leaves no plot columns for a {hours}h window"
        )));
    }
    let crop_height = height - TOP_MARGIN - BOTTOM_MARGIN;

    Ok(image::imageops::crop_imm(image, LEFT_MARGIN, TOP_MARGIN, crop_width, crop_height)
        .to_image())
}

/// Paints every near-black/near-gray pixel white, removing gridlines and
/// axis ink while leaving the saturated trace color untouched.
fn suppress_axis_ink(image: &mut RgbImage) {
    for pixel in image.pixels_mut() {
        let (_, s, v) = rgb_to_hsv(pixel);
        if s <= GRAY_SATURATION_MAX && v <= GRAY_VALUE_MAX {
            *pixel = WHITE;
        }
    }
}

/// Finds the external contours of the blue trace band and redraws them in
/// black with a 1px stroke, closing the anti-aliasing gaps the curve tracer
/// cannot bridge.
fn reinforce_trace(image: &mut RgbImage) {
    let (width, height) = image.dimensions();
    let mut blue_mask = GrayImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let (h, s, v) = rgb_to_hsv(pixel);
        if (BLUE_HUE_MIN..=BLUE_HUE_MAX).contains(&h)
            && s >= BLUE_SATURATION_MIN
            && v >= BLUE_VALUE_MIN
        {
            blue_mask.put_pixel(x, y, Luma([255u8]));
        }
    }

    for contour in find_contours::<i32>(&blue_mask) {
        if contour.border_type != BorderType::Outer {
            continue;
        }
        for point in contour.points {
            image.put_pixel(point.x as u32, point.y as u32, BLACK);
        }
    }
}

/// RGB to HSV on the compact scale: H in [0, 180), S and V in [0, 255].
fn rgb_to_hsv(pixel: &Rgb<u8>) -> (u8, u8, u8) {
    let r = pixel[0] as f32 / 255.0;
    let g = pixel[1] as f32 / 255.0;
    let b = pixel[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue_degrees = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let h = (hue_degrees / 2.0).round() as u8;
    let s = if max == 0.0 {
        0
    } else {
        (delta / max * 255.0).round() as u8
    };
    let v = (max * 255.0).round() as u8;
    (h, s, v)
}
