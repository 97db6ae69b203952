//! Graphite theme: warm amber accents on neutral greys.

use crate::theme::Theme;
use ratatui::style::Color;

/// Graphite dark variant
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x10, 0x11, 0x14),
        bg1: Color::Rgb(0x1a, 0x1c, 0x21),
        bg2: Color::Rgb(0x2a, 0x2d, 0x35),
        fg0: Color::Rgb(0xd7, 0xda, 0xe0),
        fg1: Color::Rgb(0x9d, 0xa3, 0xad),
        muted: Color::Rgb(0x56, 0x5c, 0x66),
        accent: Color::Rgb(0xe8, 0xa7, 0x5c),
        accent_alt: Color::Rgb(0xd1, 0x83, 0x5f),
        success: Color::Rgb(0x9e, 0xce, 0x6a),
        warning: Color::Rgb(0xe0, 0xaf, 0x68),
        error: Color::Rgb(0xf7, 0x76, 0x8e),
        info: Color::Rgb(0x7d, 0xcf, 0xff),
        dark: true,
    }
}

/// Graphite light variant
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfa, 0xfa, 0xfa),
        bg1: Color::Rgb(0xed, 0xed, 0xee),
        bg2: Color::Rgb(0xdc, 0xdc, 0xe0),
        fg0: Color::Rgb(0x26, 0x28, 0x2d),
        fg1: Color::Rgb(0x55, 0x5a, 0x63),
        muted: Color::Rgb(0x9a, 0xa0, 0xa8),
        accent: Color::Rgb(0xc7, 0x7d, 0x2e),
        accent_alt: Color::Rgb(0xa8, 0x5f, 0x38),
        success: Color::Rgb(0x4d, 0x7c, 0x0f),
        warning: Color::Rgb(0xb4, 0x53, 0x09),
        error: Color::Rgb(0xb9, 0x1c, 0x1c),
        info: Color::Rgb(0x03, 0x69, 0xa1),
        dark: false,
    }
}
