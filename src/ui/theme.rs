use fltk::{
    enums::{Color, Font},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

/// Colors shared by the custom-drawn widgets
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub header_bg: Color,
    pub text: Color,
    pub muted_text: Color,
    pub grid: Color,
    pub selected_row: Color,
    pub accent: Color,
    pub link: Color,
    pub danger: Color,
    pub total: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            background: Color::from_rgb(17, 24, 39),
            surface: Color::from_rgb(31, 41, 55),
            header_bg: Color::from_rgb(55, 65, 81),
            text: Color::from_rgb(229, 231, 235),
            muted_text: Color::from_rgb(156, 163, 175),
            grid: Color::from_rgb(75, 85, 99),
            selected_row: Color::from_rgb(30, 58, 95),
            accent: Color::from_rgb(96, 165, 250),
            link: Color::from_rgb(96, 165, 250),
            danger: Color::from_rgb(248, 113, 113),
            total: Color::from_rgb(248, 113, 113),
        }
    } else {
        Palette {
            background: Color::from_rgb(243, 244, 246),
            surface: Color::White,
            header_bg: Color::from_rgb(249, 250, 251),
            text: Color::from_rgb(31, 41, 55),
            muted_text: Color::from_rgb(107, 114, 128),
            grid: Color::from_rgb(229, 231, 235),
            selected_row: Color::from_rgb(219, 234, 254),
            accent: Color::from_rgb(37, 99, 235),
            link: Color::from_rgb(59, 130, 246),
            danger: Color::from_rgb(220, 38, 38),
            total: Color::from_rgb(220, 38, 38),
        }
    }
}

/// Chart series colors
pub const CHART_COLORS: [(u8, u8, u8); 6] = [
    (0, 136, 254),
    (0, 196, 159),
    (255, 187, 40),
    (255, 128, 66),
    (136, 132, 216),
    (130, 202, 157),
];

/// Map a configured font family onto an FLTK font
pub fn font_for_family(family: &str) -> Font {
    match family {
        "serif" => Font::Times,
        "monospace" => Font::Courier,
        _ => Font::Helvetica,
    }
}

/// Bold face of the same family, used for headers
pub fn bold_font_for_family(family: &str) -> Font {
    match family {
        "serif" => Font::TimesBold,
        "monospace" => Font::CourierBold,
        _ => Font::HelveticaBold,
    }
}

pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    let colors = palette(is_dark);

    window.set_color(colors.background);
    window.set_label_color(colors.text);
    menu.set_color(colors.surface);
    menu.set_text_color(colors.text);
    menu.set_selection_color(colors.header_bg);

    // Stock widgets (inputs, buttons, tabs) follow the global scheme colors
    if is_dark {
        fltk::app::background(31, 41, 55);
        fltk::app::background2(17, 24, 39);
        fltk::app::foreground(229, 231, 235);
    } else {
        fltk::app::background(243, 244, 246);
        fltk::app::background2(255, 255, 255);
        fltk::app::foreground(31, 41, 55);
    }

    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Attribute 19 on Windows 10 1809-1903
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
