use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, Tab};

/// Menu path of the dark theme toggle, kept in sync by the shell
pub const DARK_THEME_ITEM: &str = "Вигляд/Темна тема";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("Файл/Експорт в CSV...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ContractExport) });
    menu.add("Файл/Налаштування...", Shortcut::Ctrl | ',', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("Файл/Вихід", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Contracts
    menu.add("Договори/Додати договір...", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ContractAdd) });
    menu.add("Договори/Редагувати...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ContractEditSelected) });
    menu.add("Договори/Видалити", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ContractDeleteSelected) });

    // Planning
    menu.add("Планування/Додати план...", Shortcut::Ctrl | Shortcut::Shift | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PlanningAdd) });
    menu.add("Планування/Редагувати...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PlanningEditSelected) });
    menu.add("Планування/Видалити", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PlanningDeleteSelected) });

    // View
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let key = char::from(b'1' + i as u8);
        let flag = if i + 1 == Tab::ALL.len() { MenuFlag::MenuDivider } else { MenuFlag::Normal };
        menu.add(&format!("Вигляд/{}", tab.label()), Shortcut::Ctrl | key, flag, { let s = *s; move |_| s.send(Message::SwitchTab(tab)) });
    }
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_THEME_ITEM, Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleTheme) });

    // Help
    menu.add("Довідка/Про програму", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
