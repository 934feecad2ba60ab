//! Default values for configuration and profile fields.

pub fn window_title() -> String {
    "Profile Editor".to_string()
}

pub fn window_width() -> u32 {
    720
}

pub fn window_height() -> u32 {
    900
}

pub fn dark_mode() -> bool {
    true
}

/// Extensions offered by the photo pickers (the `image/*` family)
pub fn image_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tif", "tiff"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

pub fn profile_name() -> String {
    "John Doe".to_string()
}

pub fn profile_bio() -> String {
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
     incididunt ut labore et dolore magna aliqua."
        .to_string()
}

pub fn profile_email() -> String {
    "john.doe@example.com".to_string()
}

pub fn profile_phone() -> String {
    "(123) 456-7890".to_string()
}

pub fn profile_website() -> String {
    "example.com".to_string()
}
