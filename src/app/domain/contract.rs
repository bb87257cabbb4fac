use serde::{Deserialize, Serialize};

use super::record::{FieldRole, FieldSpec, FieldValue, Record};

/// How a contract was sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcurementType {
    #[default]
    #[serde(alias = "Прямий")]
    Direct,
    #[serde(alias = "Процедура")]
    Procedure,
}

impl ProcurementType {
    pub const ALL: [ProcurementType; 2] = [ProcurementType::Direct, ProcurementType::Procedure];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Direct => "Прямий",
            Self::Procedure => "Процедура",
        }
    }
}

/// A single procurement contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contract {
    pub id: String,
    pub item: String,
    pub dk_code: String,
    pub kekv: String,
    pub quantity: f64,
    pub unit: String,
    pub expected_cost: f64,
    pub contract_number: String,
    pub contract_date: String,
    pub year: i32,
    pub legal_date: String,
    pub financial_date: String,
    pub contracting_party: String,
    /// Supplementary agreement signed
    pub du: bool,
    pub reporting: bool,
    pub procurement_type: ProcurementType,
    pub prozorro_link: String,
    pub contract_file_name: String,
    pub announced_winner: String,
    pub contract_file_path: String,
}

impl Contract {
    /// Blank contract for the "add" form. The id stays empty until the
    /// record is created.
    pub fn draft(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// Where the file affordance should point: the stored path if there is
    /// one, else the bare file name.
    pub fn file_target(&self) -> Option<&str> {
        [self.contract_file_path.as_str(), self.contract_file_name.as_str()]
            .into_iter()
            .find(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    Item,
    DkCode,
    Kekv,
    Quantity,
    Unit,
    ExpectedCost,
    ContractNumber,
    ContractDate,
    Year,
    LegalDate,
    FinancialDate,
    ContractingParty,
    Du,
    Reporting,
    ProcurementType,
    ProzorroLink,
    ContractFileName,
    AnnouncedWinner,
    ContractFilePath,
}

impl FieldSpec for ContractField {
    const ALL: &'static [Self] = &[
        Self::Item,
        Self::DkCode,
        Self::Kekv,
        Self::Quantity,
        Self::Unit,
        Self::ExpectedCost,
        Self::ContractNumber,
        Self::ContractDate,
        Self::Year,
        Self::LegalDate,
        Self::FinancialDate,
        Self::ContractingParty,
        Self::Du,
        Self::Reporting,
        Self::ProcurementType,
        Self::ProzorroLink,
        Self::ContractFileName,
        Self::AnnouncedWinner,
        Self::ContractFilePath,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::DkCode => "dk_code",
            Self::Kekv => "kekv",
            Self::Quantity => "quantity",
            Self::Unit => "unit",
            Self::ExpectedCost => "expected_cost",
            Self::ContractNumber => "contract_number",
            Self::ContractDate => "contract_date",
            Self::Year => "year",
            Self::LegalDate => "legal_date",
            Self::FinancialDate => "financial_date",
            Self::ContractingParty => "contracting_party",
            Self::Du => "du",
            Self::Reporting => "reporting",
            Self::ProcurementType => "procurement_type",
            Self::ProzorroLink => "prozorro_link",
            Self::ContractFileName => "contract_file_name",
            Self::AnnouncedWinner => "announced_winner",
            Self::ContractFilePath => "contract_file_path",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Item => "Предмет закупівлі",
            Self::DkCode => "ДК 021:2015",
            Self::Kekv => "Код КЕКВ",
            Self::Quantity => "К-ть",
            Self::Unit => "Одиниця виміру",
            Self::ExpectedCost => "Ціна, ₴",
            Self::ContractNumber => "Номер договору",
            Self::ContractDate => "Дата договору",
            Self::Year => "Рік",
            Self::LegalDate => "Юридична дата",
            Self::FinancialDate => "Фінансова дата",
            Self::ContractingParty => "Постачальник або Виконавець",
            Self::Du => "ДУ",
            Self::Reporting => "Звіт",
            Self::ProcurementType => "Прямий/Процедура",
            Self::ProzorroLink => "Prozorro",
            Self::ContractFileName => "Файл договору",
            Self::AnnouncedWinner => "Оголошено переможця",
            Self::ContractFilePath => "Шлях до файлу",
        }
    }

    fn role(self) -> FieldRole {
        match self {
            Self::Du | Self::Reporting => FieldRole::Flag,
            Self::ProzorroLink => FieldRole::ExternalLink,
            Self::ContractFileName => FieldRole::FileReference,
            Self::ExpectedCost => FieldRole::Currency,
            Self::ContractDate | Self::LegalDate | Self::FinancialDate | Self::AnnouncedWinner => {
                FieldRole::Date
            }
            _ => FieldRole::Plain,
        }
    }
}

impl Record for Contract {
    type Field = ContractField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn value(&self, field: ContractField) -> FieldValue<'_> {
        match field {
            ContractField::Item => FieldValue::Text(&self.item),
            ContractField::DkCode => FieldValue::Text(&self.dk_code),
            ContractField::Kekv => FieldValue::Text(&self.kekv),
            ContractField::Quantity => FieldValue::Number(self.quantity),
            ContractField::Unit => FieldValue::Text(&self.unit),
            ContractField::ExpectedCost => FieldValue::Number(self.expected_cost),
            ContractField::ContractNumber => FieldValue::Text(&self.contract_number),
            ContractField::ContractDate => FieldValue::Text(&self.contract_date),
            ContractField::Year => FieldValue::Integer(i64::from(self.year)),
            ContractField::LegalDate => FieldValue::Text(&self.legal_date),
            ContractField::FinancialDate => FieldValue::Text(&self.financial_date),
            ContractField::ContractingParty => FieldValue::Text(&self.contracting_party),
            ContractField::Du => FieldValue::Flag(self.du),
            ContractField::Reporting => FieldValue::Flag(self.reporting),
            ContractField::ProcurementType => {
                FieldValue::Text(self.procurement_type.display_name())
            }
            ContractField::ProzorroLink => FieldValue::Text(&self.prozorro_link),
            ContractField::ContractFileName => FieldValue::Text(&self.contract_file_name),
            ContractField::AnnouncedWinner => FieldValue::Text(&self.announced_winner),
            ContractField::ContractFilePath => FieldValue::Text(&self.contract_file_path),
        }
    }
}
