//! Named constants for UI layout dimensions.
//!
//! Only UI layout constants (dimensions, sizes, spacing) belong here.
//! Visible strings live next to the view model in `view.rs`.

// ---------------------------------------------------------------------------
// Header  (src/profile_ui.rs)
// ---------------------------------------------------------------------------

/// Edge length of the square main photo slot.
pub const MAIN_PHOTO_SIZE: f32 = 120.0;
/// Gap between the main photo and the name column.
pub const HEADER_SPACING: f32 = 16.0;

// ---------------------------------------------------------------------------
// Gallery  (src/profile_ui.rs)
// ---------------------------------------------------------------------------

/// Edge length of each square gallery slot.
pub const GALLERY_PHOTO_SIZE: f32 = 140.0;
/// Gap between gallery slots.
pub const GALLERY_SPACING: f32 = 8.0;

// ---------------------------------------------------------------------------
// Form  (src/profile_ui.rs)
// ---------------------------------------------------------------------------

/// Visible rows of the multiline bio input.
pub const BIO_INPUT_ROWS: usize = 4;
/// Vertical space between page sections.
pub const SECTION_SPACING: f32 = 12.0;
/// Inner margin of the page.
pub const PAGE_MARGIN: f32 = 16.0;
