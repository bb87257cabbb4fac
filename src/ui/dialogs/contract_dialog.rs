use fltk::{
    button::{Button, CheckButton},
    group::Flex,
    input::Input,
    menu::Choice,
    prelude::*,
    window::Window,
};

use super::{form_buttons, form_field, form_label, form_title, run_dialog};
use crate::app::domain::{Contract, ProcurementType};
use crate::app::services::format::{parse_number, parse_year};
use crate::ui::file_dialogs::contract_file_dialog;

const DATE_HINT: &str = "РРРР-ММ-ДД";

struct ContractForm {
    item: Input,
    dk_code: Input,
    kekv: Input,
    quantity: Input,
    unit: Input,
    expected_cost: Input,
    contract_number: Input,
    contract_date: Input,
    year: Input,
    legal_date: Input,
    financial_date: Input,
    contracting_party: Input,
    procurement_type: Choice,
    prozorro_link: Input,
    contract_file_name: Input,
    announced_winner: Input,
    contract_file_path: Input,
    du: CheckButton,
    reporting: CheckButton,
}

impl ContractForm {
    /// Read the form back into a contract, keeping the original id
    fn read(&self, id: &str) -> Contract {
        let procurement_type = usize::try_from(self.procurement_type.value())
            .ok()
            .and_then(|i| ProcurementType::ALL.get(i).copied())
            .unwrap_or_default();

        Contract {
            id: id.to_string(),
            item: self.item.value(),
            dk_code: self.dk_code.value(),
            kekv: self.kekv.value(),
            quantity: parse_number(&self.quantity.value()),
            unit: self.unit.value(),
            expected_cost: parse_number(&self.expected_cost.value()),
            contract_number: self.contract_number.value(),
            contract_date: self.contract_date.value().trim().to_string(),
            year: parse_year(&self.year.value()),
            legal_date: self.legal_date.value().trim().to_string(),
            financial_date: self.financial_date.value().trim().to_string(),
            contracting_party: self.contracting_party.value(),
            du: self.du.value(),
            reporting: self.reporting.value(),
            procurement_type,
            prozorro_link: self.prozorro_link.value().trim().to_string(),
            contract_file_name: self.contract_file_name.value(),
            announced_winner: self.announced_winner.value().trim().to_string(),
            contract_file_path: self.contract_file_path.value(),
        }
    }
}

fn date_field(column: &mut Flex, label: &str, value: &str) -> Input {
    let mut input = form_field(column, label, value);
    input.set_tooltip(DATE_HINT);
    input
}

/// Show the add/edit form for a contract. Returns the edited record when
/// the user saves; `None` when the dialog is cancelled or closed.
pub fn show_contract_dialog(contract: &Contract, is_new: bool) -> Option<Contract> {
    let title = if is_new { "Додати договір" } else { "Редагувати договір" };
    let mut dialog = Window::default()
        .with_size(760, 640)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    let mut outer = Flex::new(12, 12, 736, 616, None).column();
    outer.set_spacing(8);
    form_title(&mut outer, title);

    let mut columns = Flex::default().row();
    columns.set_spacing(16);

    let mut left = Flex::default().column();
    left.set_spacing(2);
    let item = form_field(&mut left, "Предмет закупівлі", &contract.item);
    let dk_code = form_field(&mut left, "Код ДК 021:2015", &contract.dk_code);
    let kekv = form_field(&mut left, "Код КЕКВ", &contract.kekv);
    let quantity = form_field(&mut left, "Кількість", &contract.quantity.to_string());
    let unit = form_field(&mut left, "Одиниця виміру", &contract.unit);
    let expected_cost = form_field(&mut left, "Очікувана вартість", &contract.expected_cost.to_string());
    let contract_number = form_field(&mut left, "Номер договору", &contract.contract_number);
    let contract_date = date_field(&mut left, "Дата договору", &contract.contract_date);
    let year = form_field(&mut left, "Рік", &contract.year.to_string());
    left.end();

    let mut right = Flex::default().column();
    right.set_spacing(2);
    let legal_date = date_field(&mut right, "Юридична дата", &contract.legal_date);
    let financial_date = date_field(&mut right, "Фінансова дата", &contract.financial_date);
    let contracting_party = form_field(&mut right, "Постачальник", &contract.contracting_party);

    form_label(&mut right, "Тип закупки");
    let mut procurement_type = Choice::default();
    for kind in ProcurementType::ALL {
        procurement_type.add_choice(kind.display_name());
    }
    let type_index = ProcurementType::ALL
        .iter()
        .position(|k| *k == contract.procurement_type)
        .unwrap_or(0);
    procurement_type.set_value(type_index as i32);
    right.fixed(&procurement_type, 26);

    let prozorro_link = form_field(&mut right, "Посилання на Prozorro", &contract.prozorro_link);
    let contract_file_name = form_field(&mut right, "Ім'я файлу договору", &contract.contract_file_name);
    let announced_winner = date_field(&mut right, "Дата оголошення переможця", &contract.announced_winner);

    form_label(&mut right, "Шлях до файлу");
    let mut path_row = Flex::default().row();
    let mut contract_file_path = Input::default();
    contract_file_path.set_value(&contract.contract_file_path);
    let mut browse_btn = Button::default().with_label("Огляд...");
    path_row.fixed(&browse_btn, 80);
    path_row.end();
    right.fixed(&path_row, 26);
    right.end();

    columns.end();

    let mut flags = Flex::default().row();
    let mut du = CheckButton::default().with_label("Додаткова угода (ДУ)");
    du.set_value(contract.du);
    let mut reporting = CheckButton::default().with_label("Звітність");
    reporting.set_value(contract.reporting);
    flags.end();
    outer.fixed(&flags, 26);

    let saved = form_buttons(&mut outer, &dialog);
    outer.end();
    dialog.end();

    let mut path_input = contract_file_path.clone();
    let mut name_input = contract_file_name.clone();
    browse_btn.set_callback(move |_| {
        if let Some(path) = contract_file_dialog() {
            path_input.set_value(&path.to_string_lossy());
            if name_input.value().trim().is_empty()
                && let Some(name) = path.file_name()
            {
                name_input.set_value(&name.to_string_lossy());
            }
        }
    });

    let form = ContractForm {
        item,
        dk_code,
        kekv,
        quantity,
        unit,
        expected_cost,
        contract_number,
        contract_date,
        year,
        legal_date,
        financial_date,
        contracting_party,
        procurement_type,
        prozorro_link,
        contract_file_name,
        announced_winner,
        contract_file_path,
        du,
        reporting,
    };

    dialog.show();
    run_dialog(&dialog);

    if saved.get() { Some(form.read(&contract.id)) } else { None }
}
