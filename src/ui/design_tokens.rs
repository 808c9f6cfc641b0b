// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every section of the landing page.
//!
//! Colors follow the page's brand palette; the spacing scale sits on an
//! 8px grid.
//!
//! ```
//! use kutu_landing::ui::design_tokens::{palette, spacing};
//!
//! let accent = palette::PRIMARY_500;
//! let padding = spacing::MD; // 16px
//! assert!(padding > 0.0 && accent.a == 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6b7280
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #d1d5db
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #f3f4f6

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // #818cf8
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // #6366f1
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // #4f46e5

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10b981
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Tint behind a hovered ghost button.
    pub const HOVER: f32 = 0.15;
    /// Hovered filled control.
    pub const HOVER_STRONG: f32 = 0.8;
    /// Full-window celebration overlay.
    pub const OVERLAY: f32 = 0.9;
    /// Dimmed backdrop behind a modal.
    pub const BACKDROP: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const MESSAGE_HEIGHT: f32 = 120.0;

    /// Carousel indicator dot diameter.
    pub const DOT: f32 = 12.0;

    pub const CONTENT_WIDTH: f32 = 960.0;
    pub const CARD_WIDTH: f32 = 280.0;
    pub const FORM_WIDTH: f32 = 560.0;

    pub const TOAST_WIDTH: f32 = 400.0;
    /// Distance between the window top and the toast stack.
    pub const TOAST_TOP: f32 = 80.0;

    pub const MODAL_WIDTH: f32 = 640.0;
    /// Height of the demo video placeholder.
    pub const VIDEO_HEIGHT: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline
    pub const DISPLAY: f32 = 40.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, brand name
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    /// Toast text, form inputs
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Validation errors, testimonial authors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(opacity::HOVER > 0.0 && opacity::HOVER < opacity::HOVER_STRONG);
    assert!(opacity::OVERLAY < 1.0);
    assert!(sizing::TOAST_WIDTH > sizing::CARD_WIDTH);
};
