pub mod about;
pub mod contract_dialog;
pub mod planning_dialog;
pub mod settings_dialog;

use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app,
    button::Button,
    dialog,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    window::Window,
};

const LABEL_H: i32 = 18;
const FIELD_H: i32 = 26;
const BUTTON_ROW_H: i32 = 32;

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// Yes/no question before a record is removed. "Ні" is the default button.
pub fn confirm_delete(question: &str) -> bool {
    dialog::choice2_default(question, "Ні", "Так", "") == Some(1)
}

/// Label above an input inside a column form
pub(crate) fn form_label(column: &mut Flex, label: &str) {
    let frame = Frame::default()
        .with_label(label)
        .with_align(Align::Left | Align::Inside);
    column.fixed(&frame, LABEL_H);
}

pub(crate) fn form_field(column: &mut Flex, label: &str, value: &str) -> Input {
    form_label(column, label);
    let mut input = Input::default();
    input.set_value(value);
    column.fixed(&input, FIELD_H);
    input
}

pub(crate) fn form_title(column: &mut Flex, title: &str) {
    let mut frame = Frame::default()
        .with_label(title)
        .with_align(Align::Left | Align::Inside);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(18);
    column.fixed(&frame, 30);
}

/// "Скасувати" / "Зберегти" row. Returns a flag that is set when the
/// dialog was closed through the save button.
pub(crate) fn form_buttons(column: &mut Flex, dialog: &Window) -> Rc<Cell<bool>> {
    let mut row = Flex::default().row();
    Frame::default();
    let mut cancel_btn = Button::default().with_label("Скасувати");
    row.fixed(&cancel_btn, 110);
    let mut save_btn = Button::default().with_label("Зберегти");
    row.fixed(&save_btn, 110);
    row.end();
    column.fixed(&row, BUTTON_ROW_H);

    let saved = Rc::new(Cell::new(false));

    let mut dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| dialog_cancel.hide());

    let mut dialog_save = dialog.clone();
    let saved_flag = saved.clone();
    save_btn.set_callback(move |_| {
        saved_flag.set(true);
        dialog_save.hide();
    });

    saved
}
