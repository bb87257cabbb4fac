use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, Tabs},
    input::Input,
    menu::{Choice, MenuBar},
    prelude::*,
    window::Window,
};

use super::data_table::DataTable;
use super::stats_view::StatsView;
use crate::app::domain::{Message, Tab, TableId};

const WINDOW_W: i32 = 1280;
const WINDOW_H: i32 = 800;
const MENU_H: i32 = 30;
const TAB_ROW_H: i32 = 28;
const TOOLBAR_H: i32 = 34;
const HEADER_H: i32 = 48;

/// Label of the year selector entry that disables the filter
pub const ALL_YEARS_LABEL: &str = "Всі роки";

pub struct ContractsPage {
    pub group: Flex,
    pub search: Input,
    pub year: Choice,
    pub summary: Frame,
    pub table: DataTable,
}

pub struct PlanningPage {
    pub group: Flex,
    pub search: Input,
    pub table: DataTable,
}

pub struct StatisticsPage {
    pub group: Flex,
    pub view: StatsView,
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub tabs: Tabs,
    pub contracts: ContractsPage,
    pub planning: PlanningPage,
    pub statistics: StatisticsPage,
}

impl MainWidgets {
    pub fn page_group(&self, tab: Tab) -> &Flex {
        match tab {
            Tab::Contracts => &self.contracts.group,
            Tab::Planning => &self.planning.group,
            Tab::Statistics => &self.statistics.group,
        }
    }
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, "ContractDesk");
    wind.set_xclass("ContractDesk");

    let mut flex = Flex::new(0, 0, WINDOW_W, WINDOW_H, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_H, "");
    flex.fixed(&menu, MENU_H);

    let mut tabs = Tabs::new(0, MENU_H, WINDOW_W, WINDOW_H - MENU_H, "");
    let (px, py, pw, ph) = (0, MENU_H + TAB_ROW_H, WINDOW_W, WINDOW_H - MENU_H - TAB_ROW_H);

    let contracts = build_contracts_page(px, py, pw, ph, sender);
    let planning = build_planning_page(px, py, pw, ph, sender);
    let statistics = build_statistics_page(px, py, pw, ph);

    tabs.end();
    tabs.resizable(&contracts.group);
    tabs.set_value(&contracts.group).ok();

    let s = *sender;
    tabs.set_callback(move |t| {
        if let Some(page) = t.value()
            && let Some(tab) = Tab::from_label(&page.label())
        {
            s.send(Message::SwitchTab(tab));
        }
    });

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        tabs,
        contracts,
        planning,
        statistics,
    }
}

fn page_header(page: &mut Flex, title: &str, subtitle: &str) {
    let mut header = Frame::default();
    header.set_label(&format!("{}\n{}", title, subtitle));
    header.set_label_font(Font::HelveticaBold);
    header.set_label_size(16);
    header.set_align(Align::Left | Align::Inside);
    page.fixed(&header, HEADER_H);
}

fn toolbar_button(toolbar: &mut Flex, label: &str, width: i32, sender: &Sender<Message>, msg: Message) {
    let mut button = Button::default().with_label(label);
    let s = *sender;
    button.set_callback(move |_| s.send(msg.clone()));
    toolbar.fixed(&button, width);
}

fn search_label(toolbar: &mut Flex) {
    let label = Frame::default()
        .with_label("Пошук:")
        .with_align(Align::Right | Align::Inside);
    toolbar.fixed(&label, 60);
}

fn search_input(toolbar: &mut Flex, sender: &Sender<Message>, to_message: fn(String) -> Message) -> Input {
    let mut search = Input::default();
    search.set_tooltip("Пошук...");
    search.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    search.set_callback(move |input| s.send(to_message(input.value())));
    toolbar.fixed(&search, 260);
    search
}

fn build_contracts_page(x: i32, y: i32, w: i32, h: i32, sender: &Sender<Message>) -> ContractsPage {
    let mut group = Flex::new(x, y, w, h, Tab::Contracts.label()).column();
    group.set_margin(10);
    group.set_spacing(8);

    page_header(&mut group, "Управління договорами", "Додавайте, редагуйте та переглядайте договори.");

    let mut toolbar = Flex::default().row();
    toolbar.set_spacing(8);
    search_label(&mut toolbar);
    let search = search_input(&mut toolbar, sender, Message::ContractSearch);

    let mut year = Choice::default();
    year.add_choice(ALL_YEARS_LABEL);
    year.set_value(0);
    let s = *sender;
    year.set_callback(move |c| {
        let selected = c.choice().and_then(|label| label.parse::<i32>().ok());
        s.send(Message::ContractYearFilter(selected));
    });
    toolbar.fixed(&year, 120);

    Frame::default();
    toolbar_button(&mut toolbar, "Експорт в CSV", 130, sender, Message::ContractExport);
    toolbar_button(&mut toolbar, "Редагувати", 110, sender, Message::ContractEditSelected);
    toolbar_button(&mut toolbar, "Видалити", 100, sender, Message::ContractDeleteSelected);
    toolbar_button(&mut toolbar, "Додати договір", 140, sender, Message::ContractAdd);
    toolbar.end();
    group.fixed(&toolbar, TOOLBAR_H);

    let mut summary = Frame::default();
    summary.set_align(Align::Right | Align::Inside);
    summary.set_label_font(Font::HelveticaBold);
    summary.set_label_size(13);
    group.fixed(&summary, 22);

    let table = DataTable::new(TableId::Contracts, true, *sender);

    group.end();

    ContractsPage {
        group,
        search,
        year,
        summary,
        table,
    }
}

fn build_planning_page(x: i32, y: i32, w: i32, h: i32, sender: &Sender<Message>) -> PlanningPage {
    let mut group = Flex::new(x, y, w, h, Tab::Planning.label()).column();
    group.set_margin(10);
    group.set_spacing(8);

    page_header(&mut group, "Планування закупівель", "Керуйте планованими закупівлями.");

    let mut toolbar = Flex::default().row();
    toolbar.set_spacing(8);
    search_label(&mut toolbar);
    let search = search_input(&mut toolbar, sender, Message::PlanningSearch);
    Frame::default();
    toolbar_button(&mut toolbar, "Редагувати", 110, sender, Message::PlanningEditSelected);
    toolbar_button(&mut toolbar, "Видалити", 100, sender, Message::PlanningDeleteSelected);
    toolbar_button(&mut toolbar, "Додати план", 130, sender, Message::PlanningAdd);
    toolbar.end();
    group.fixed(&toolbar, TOOLBAR_H);

    let table = DataTable::new(TableId::Planning, false, *sender);

    group.end();
    group.hide();

    PlanningPage { group, search, table }
}

fn build_statistics_page(x: i32, y: i32, w: i32, h: i32) -> StatisticsPage {
    let mut group = Flex::new(x, y, w, h, Tab::Statistics.label()).column();
    let view = StatsView::new();
    group.end();
    group.hide();

    StatisticsPage { group, view }
}
