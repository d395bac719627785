/// Canvas size for a `width` x `height` image shrunk to fit `max_side`.
/// Never upscales.
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest == 0 {
        return (0, 0);
    }
    let scale = (max_side as f64 / longest as f64).min(1.0);
    (
        (width as f64 * scale).round() as u32,
        (height as f64 * scale).round() as u32,
    )
}

/// Size and JPEG quality used when attaching a photo at sign-in.
pub const SIGN_IN_PHOTO: (u32, f64) = (256, 0.75);
/// Size and JPEG quality used on the profile page.
pub const PROFILE_PHOTO: (u32, f64) = (512, 0.8);
