//! Aurora theme, the house palette: indigo and violet over deep space.

use crate::theme::Theme;
use ratatui::style::Color;

/// Aurora dark variant
pub fn dark() -> Theme {
    Theme {
        // Night sky
        bg0: Color::Rgb(0x0b, 0x10, 0x21),
        bg1: Color::Rgb(0x15, 0x1b, 0x34),
        bg2: Color::Rgb(0x22, 0x2a, 0x4d),
        // Starlight
        fg0: Color::Rgb(0xe2, 0xe8, 0xf0),
        fg1: Color::Rgb(0xa5, 0xb0, 0xc8),
        muted: Color::Rgb(0x5d, 0x68, 0x8a),
        // Aurora band
        accent: Color::Rgb(0x63, 0x66, 0xf1),
        accent_alt: Color::Rgb(0xa7, 0x8b, 0xfa),
        success: Color::Rgb(0x34, 0xd3, 0x99),
        warning: Color::Rgb(0xfb, 0xbf, 0x24),
        error: Color::Rgb(0xf8, 0x71, 0x71),
        info: Color::Rgb(0x38, 0xbd, 0xf8),
        dark: true,
    }
}

/// Aurora light variant
pub fn light() -> Theme {
    Theme {
        // Morning haze
        bg0: Color::Rgb(0xf5, 0xf7, 0xff),
        bg1: Color::Rgb(0xe8, 0xec, 0xfb),
        bg2: Color::Rgb(0xd4, 0xda, 0xf2),
        // Ink
        fg0: Color::Rgb(0x1e, 0x24, 0x40),
        fg1: Color::Rgb(0x4a, 0x53, 0x77),
        muted: Color::Rgb(0x8b, 0x94, 0xb5),
        // Aurora band
        accent: Color::Rgb(0x4f, 0x46, 0xe5),
        accent_alt: Color::Rgb(0x7c, 0x3a, 0xed),
        success: Color::Rgb(0x05, 0x96, 0x69),
        warning: Color::Rgb(0xd9, 0x77, 0x06),
        error: Color::Rgb(0xdc, 0x26, 0x26),
        info: Color::Rgb(0x02, 0x84, 0xc7),
        dark: false,
    }
}
