use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::CheckButton,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    menu::Choice,
    prelude::*,
    window::Window,
};

use super::{form_buttons, form_label, form_title, run_dialog};
use crate::app::controllers::settings_editor::SettingsEditor;
use crate::app::domain::settings::{FONT_FAMILIES, FONT_SIZES};
use crate::app::domain::{AppSettings, ThemeMode};

const COLUMN_GRID: usize = 3;
const THEMES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

fn font_display_name(family: &str) -> &'static str {
    match family {
        "serif" => "Serif",
        "monospace" => "Monospace",
        _ => "Sans-serif",
    }
}

fn section_heading(column: &mut Flex, text: &str) {
    let mut frame = Frame::default()
        .with_label(text)
        .with_align(Align::Left | Align::Inside);
    frame.set_label_font(Font::HelveticaBold);
    column.fixed(&frame, 24);
}

/// Show settings dialog and return updated settings if user clicked Save.
/// Edits go to a working copy; cancelling leaves `current` untouched.
pub fn show_settings_dialog(current: &AppSettings) -> Option<AppSettings> {
    let editor = Rc::new(RefCell::new(SettingsEditor::new(current)));
    let column_rows = current.column_visibility.len().div_ceil(COLUMN_GRID) as i32;
    let height = 330 + column_rows * 26;

    let mut dialog = Window::default()
        .with_size(620, height)
        .with_label("Налаштування")
        .center_screen();
    dialog.make_modal(true);

    let mut outer = Flex::new(12, 12, 596, height - 24, None).column();
    outer.set_spacing(6);
    form_title(&mut outer, "Налаштування");
    section_heading(&mut outer, "Зовнішній вигляд");

    form_label(&mut outer, "Тема");
    let mut theme = Choice::default();
    for mode in THEMES {
        theme.add_choice(mode.display_name());
    }
    theme.set_value(THEMES.iter().position(|m| *m == current.theme).unwrap_or(0) as i32);
    outer.fixed(&theme, 26);

    form_label(&mut outer, "Шрифт");
    let mut font = Choice::default();
    for family in FONT_FAMILIES {
        font.add_choice(font_display_name(family));
    }
    font.set_value(FONT_FAMILIES.iter().position(|f| *f == current.font).unwrap_or(0) as i32);
    outer.fixed(&font, 26);

    form_label(&mut outer, "Розмір шрифту");
    let mut size = Choice::default();
    for s in FONT_SIZES {
        size.add_choice(&s.to_string());
    }
    size.set_value(FONT_SIZES.iter().position(|s| *s == current.font_size).unwrap_or(1) as i32);
    outer.fixed(&size, 26);

    section_heading(&mut outer, "Видимість колонок в таблиці договорів");
    for chunk in current.column_visibility.chunks(COLUMN_GRID) {
        let mut row = Flex::default().row();
        for column in chunk {
            let mut check = CheckButton::default().with_label(&column.label);
            check.set_value(column.visible);
            let key = column.key.clone();
            let editor = editor.clone();
            check.set_callback(move |_| {
                editor.borrow_mut().toggle_column(&key);
            });
        }
        // keep the last row aligned with the grid
        for _ in chunk.len()..COLUMN_GRID {
            Frame::default();
        }
        row.end();
        outer.fixed(&row, 24);
    }

    Frame::default();
    let saved = form_buttons(&mut outer, &dialog);
    outer.end();
    dialog.end();

    let theme_editor = editor.clone();
    theme.set_callback(move |c| {
        if let Some(mode) = usize::try_from(c.value()).ok().and_then(|i| THEMES.get(i)) {
            theme_editor.borrow_mut().set_theme(*mode);
        }
    });

    let font_editor = editor.clone();
    font.set_callback(move |c| {
        if let Some(family) = usize::try_from(c.value()).ok().and_then(|i| FONT_FAMILIES.get(i)) {
            font_editor.borrow_mut().set_font(*family);
        }
    });

    let size_editor = editor.clone();
    size.set_callback(move |c| {
        if let Some(s) = usize::try_from(c.value()).ok().and_then(|i| FONT_SIZES.get(i)) {
            size_editor.borrow_mut().set_font_size(*s);
        }
    });

    dialog.show();
    run_dialog(&dialog);

    // Callbacks hold clones of the editor until the widgets are dropped,
    // so take a copy of the draft rather than unwrapping the Rc.
    let editor = editor.borrow().clone();
    if saved.get() {
        Some(editor.commit())
    } else {
        editor.cancel();
        None
    }
}
