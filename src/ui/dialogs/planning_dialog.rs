use fltk::{group::Flex, prelude::*, window::Window};

use super::{form_buttons, form_field, form_title, run_dialog};
use crate::app::domain::PlanningItem;

/// Add/edit form for a planned procurement. Every field is free text.
pub fn show_planning_dialog(item: &PlanningItem, is_new: bool) -> Option<PlanningItem> {
    let title = if is_new { "Додати план" } else { "Редагувати план" };
    let mut dialog = Window::default()
        .with_size(640, 420)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    let mut outer = Flex::new(12, 12, 616, 396, None).column();
    outer.set_spacing(8);
    form_title(&mut outer, title);

    let mut columns = Flex::default().row();
    columns.set_spacing(16);

    let mut left = Flex::default().column();
    left.set_spacing(2);
    let name = form_field(&mut left, "Назва предмета закупівлі", &item.name);
    let classifiers = form_field(&mut left, "Коди класифікаторів", &item.classifiers);
    let kekv = form_field(&mut left, "Код КЕКВ", &item.kekv);
    let budget = form_field(&mut left, "Розмір бюджетного призначення", &item.budget);
    left.end();

    let mut right = Flex::default().column();
    right.set_spacing(2);
    let procedure = form_field(&mut right, "Процедура закупки", &item.procedure);
    let mut start_date = form_field(&mut right, "Орієнтовний початок", &item.start_date);
    start_date.set_tooltip("РРРР-ММ-ДД");
    let volume = form_field(&mut right, "Обсяг закупки", &item.volume);
    let notes = form_field(&mut right, "Примітки", &item.notes);
    right.end();

    columns.end();

    let saved = form_buttons(&mut outer, &dialog);
    outer.end();
    dialog.end();
    dialog.show();
    run_dialog(&dialog);

    if !saved.get() {
        return None;
    }

    Some(PlanningItem {
        id: item.id.clone(),
        name: name.value(),
        classifiers: classifiers.value(),
        kekv: kekv.value(),
        budget: budget.value(),
        procedure: procedure.value(),
        start_date: start_date.value().trim().to_string(),
        volume: volume.value(),
        notes: notes.value(),
    })
}
