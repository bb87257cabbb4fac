use serde::{Deserialize, Serialize};

use super::record::{FieldRole, FieldSpec, FieldValue, Record};

/// A planned future procurement. Every attribute is free text, dates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlanningItem {
    pub id: String,
    pub name: String,
    pub classifiers: String,
    pub kekv: String,
    pub budget: String,
    pub procedure: String,
    pub start_date: String,
    pub volume: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanningField {
    Name,
    Classifiers,
    Kekv,
    Budget,
    Procedure,
    StartDate,
    Volume,
    Notes,
}

impl FieldSpec for PlanningField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Classifiers,
        Self::Kekv,
        Self::Budget,
        Self::Procedure,
        Self::StartDate,
        Self::Volume,
        Self::Notes,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Classifiers => "classifiers",
            Self::Kekv => "kekv",
            Self::Budget => "budget",
            Self::Procedure => "procedure",
            Self::StartDate => "start_date",
            Self::Volume => "volume",
            Self::Notes => "notes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Назва предмета закупівлі",
            Self::Classifiers => "Коди класифікаторів",
            Self::Kekv => "Код КЕКВ",
            Self::Budget => "Розмір бюджетного призначення",
            Self::Procedure => "Процедура закупки",
            Self::StartDate => "Орієнтовний початок",
            Self::Volume => "Обсяг закупки",
            Self::Notes => "Примітки",
        }
    }

    fn role(self) -> FieldRole {
        FieldRole::Plain
    }
}

impl Record for PlanningItem {
    type Field = PlanningField;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn value(&self, field: PlanningField) -> FieldValue<'_> {
        let text = match field {
            PlanningField::Name => &self.name,
            PlanningField::Classifiers => &self.classifiers,
            PlanningField::Kekv => &self.kekv,
            PlanningField::Budget => &self.budget,
            PlanningField::Procedure => &self.procedure,
            PlanningField::StartDate => &self.start_date,
            PlanningField::Volume => &self.volume,
            PlanningField::Notes => &self.notes,
        };
        FieldValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_plain_text() {
        let item = PlanningItem {
            start_date: "II квартал".to_string(),
            ..Default::default()
        };
        for field in PlanningField::ALL {
            assert_eq!(field.role(), FieldRole::Plain);
            assert!(matches!(item.value(*field), FieldValue::Text(_)));
        }
        assert_eq!(item.value(PlanningField::StartDate), FieldValue::Text("II квартал"));
    }

    #[test]
    fn test_roundtrip_keeps_keys() {
        let item = PlanningItem {
            id: "p1".to_string(),
            name: "Канцтовари".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"classifiers\""));
        let loaded: PlanningItem = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, item);
    }
}
