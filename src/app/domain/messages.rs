use crate::app::controllers::table::TableEvent;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Contracts,
    Planning,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Contracts, Tab::Planning, Tab::Statistics];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Contracts => "Договори",
            Tab::Planning => "Планування",
            Tab::Statistics => "Статистика",
        }
    }

    pub fn from_label(label: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Which table a table event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Contracts,
    Planning,
}

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SwitchTab(Tab),

    // Contracts
    ContractSearch(String),
    ContractYearFilter(Option<i32>),
    ContractAdd,
    ContractEditSelected,
    ContractDeleteSelected,
    ContractExport,

    // Planning
    PlanningSearch(String),
    PlanningAdd,
    PlanningEditSelected,
    PlanningDeleteSelected,

    /// Interaction reported by one of the data tables
    Table(TableId, TableEvent),

    // View & settings
    ToggleTheme,
    OpenSettings,
    ShowAbout,

    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_label(tab.label()), Some(tab));
        }
        assert_eq!(Tab::from_label("Unknown"), None);
    }
}
