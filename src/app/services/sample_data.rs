//! Built-in dataset written on first run.

use crate::app::domain::{Contract, PlanningItem, ProcurementType};

pub fn contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: "2024-01-15T09:00:00.000Z".to_string(),
            item: "Папір офісний А4".to_string(),
            dk_code: "30190000-7".to_string(),
            kekv: "2210".to_string(),
            quantity: 50.0,
            unit: "пачка".to_string(),
            expected_cost: 9250.0,
            contract_number: "12/24".to_string(),
            contract_date: "2024-01-15".to_string(),
            year: 2024,
            legal_date: "2024-01-15".to_string(),
            financial_date: "2024-01-20".to_string(),
            contracting_party: "ТОВ \"Офіс Сервіс\"".to_string(),
            du: false,
            reporting: true,
            procurement_type: ProcurementType::Direct,
            prozorro_link: "https://prozorro.gov.ua/tender/UA-2024-01-15-000123-a".to_string(),
            contract_file_name: "dogovir_12_24.pdf".to_string(),
            announced_winner: String::new(),
            contract_file_path: String::new(),
        },
        Contract {
            id: "2024-03-04T10:30:00.000Z".to_string(),
            item: "Бензин А-95".to_string(),
            dk_code: "09130000-9".to_string(),
            kekv: "2210".to_string(),
            quantity: 1200.0,
            unit: "л".to_string(),
            expected_cost: 68400.0,
            contract_number: "31-П".to_string(),
            contract_date: "2024-03-04".to_string(),
            year: 2024,
            legal_date: "2024-03-04".to_string(),
            financial_date: "2024-03-11".to_string(),
            contracting_party: "ПП \"Нафтатрейд\"".to_string(),
            du: true,
            reporting: true,
            procurement_type: ProcurementType::Procedure,
            prozorro_link: "https://prozorro.gov.ua/tender/UA-2024-02-12-004512-a".to_string(),
            contract_file_name: "dogovir_31_P.pdf".to_string(),
            announced_winner: "2024-02-27".to_string(),
            contract_file_path: String::new(),
        },
        Contract {
            id: "2023-06-19T08:15:00.000Z".to_string(),
            item: "Обслуговування комп'ютерної техніки".to_string(),
            dk_code: "50320000-4".to_string(),
            kekv: "2240".to_string(),
            quantity: 1.0,
            unit: "послуга".to_string(),
            expected_cost: 24000.0,
            contract_number: "45/23".to_string(),
            contract_date: "2023-06-19".to_string(),
            year: 2023,
            legal_date: "2023-06-19".to_string(),
            financial_date: "2023-06-30".to_string(),
            contracting_party: "ФОП Ковальчук І.В.".to_string(),
            du: false,
            reporting: true,
            procurement_type: ProcurementType::Direct,
            prozorro_link: String::new(),
            contract_file_name: String::new(),
            announced_winner: String::new(),
            contract_file_path: String::new(),
        },
        Contract {
            id: "2023-09-01T12:00:00.000Z".to_string(),
            item: "Канцелярське приладдя".to_string(),
            dk_code: "30190000-7".to_string(),
            kekv: "2210".to_string(),
            quantity: 1.0,
            unit: "комплект".to_string(),
            expected_cost: 4375.5,
            contract_number: "77/23".to_string(),
            contract_date: "2023-09-01".to_string(),
            year: 2023,
            legal_date: "2023-09-01".to_string(),
            financial_date: "2023-09-05".to_string(),
            contracting_party: "ТОВ \"Офіс Сервіс\"".to_string(),
            du: false,
            reporting: false,
            procurement_type: ProcurementType::Direct,
            prozorro_link: String::new(),
            contract_file_name: "dogovir_77_23.pdf".to_string(),
            announced_winner: String::new(),
            contract_file_path: String::new(),
        },
        Contract {
            id: "2025-02-10T14:45:00.000Z".to_string(),
            item: "Поточний ремонт покрівлі".to_string(),
            dk_code: "45260000-7".to_string(),
            kekv: "2240".to_string(),
            quantity: 1.0,
            unit: "робота".to_string(),
            expected_cost: 412800.0,
            contract_number: "5-Р".to_string(),
            contract_date: "2025-02-10".to_string(),
            year: 2025,
            legal_date: "2025-02-10".to_string(),
            financial_date: String::new(),
            contracting_party: "ТОВ \"Будмонтаж Плюс\"".to_string(),
            du: false,
            reporting: false,
            procurement_type: ProcurementType::Procedure,
            prozorro_link: "https://prozorro.gov.ua/tender/UA-2025-01-08-001977-a".to_string(),
            contract_file_name: String::new(),
            announced_winner: "2025-01-30".to_string(),
            contract_file_path: String::new(),
        },
    ]
}

pub fn planning_items() -> Vec<PlanningItem> {
    vec![
        PlanningItem {
            id: "2024-11-05T09:00:00.000Z".to_string(),
            name: "Електрична енергія".to_string(),
            classifiers: "ДК 021:2015: 09310000-5".to_string(),
            kekv: "2273".to_string(),
            budget: "350 000 грн".to_string(),
            procedure: "Відкриті торги з особливостями".to_string(),
            start_date: "Січень".to_string(),
            volume: "120 000 кВт·год".to_string(),
            notes: "Потрібно погодити обсяг з бухгалтерією".to_string(),
        },
        PlanningItem {
            id: "2024-11-05T09:20:00.000Z".to_string(),
            name: "Миючі засоби".to_string(),
            classifiers: "ДК 021:2015: 39830000-9".to_string(),
            kekv: "2210".to_string(),
            budget: "18 500 грн".to_string(),
            procedure: "Пряма закупівля".to_string(),
            start_date: "II квартал".to_string(),
            volume: "За потребою".to_string(),
            notes: String::new(),
        },
        PlanningItem {
            id: "2024-11-06T11:10:00.000Z".to_string(),
            name: "Страхування транспортних засобів".to_string(),
            classifiers: "ДК 021:2015: 66510000-8".to_string(),
            kekv: "2240".to_string(),
            budget: "9 600 грн".to_string(),
            procedure: "Пряма закупівля".to_string(),
            start_date: "Березень".to_string(),
            volume: "3 авто".to_string(),
            notes: "Поліси спливають у квітні".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Record;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let sample = contracts();
        let ids: HashSet<&str> = sample.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), sample.len());

        let planning = planning_items();
        let ids: HashSet<&str> = planning.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), planning.len());
    }

    #[test]
    fn test_sample_covers_both_procurement_types() {
        let sample = contracts();
        for kind in ProcurementType::ALL {
            assert!(sample.iter().any(|c| c.procurement_type == kind));
        }
    }
}
