use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    draw,
    enums::{Align, Color, Font},
    prelude::*,
    widget::Widget,
};

use super::theme::{CHART_COLORS, Palette, palette};
use crate::app::services::format::format_currency;
use crate::app::services::stats::{Statistics, StatisticsView};

const TITLE_HEIGHT: i32 = 56;
const PANEL_GAP: i32 = 16;
const PANEL_PADDING: i32 = 14;
const PANEL_TITLE_HEIGHT: i32 = 26;
const AXIS_LABEL_HEIGHT: i32 = 18;
const SUPPLIER_LABEL_WIDTH: i32 = 150;

const TITLE: &str = "Статистика по договорах";
const NO_DATA_TITLE: &str = "Статистика";
const NO_DATA_TEXT: &str = "Немає даних для відображення. Додайте договори, щоб побачити статистику.";

const COUNT_BY_YEAR_TITLE: &str = "Кількість договорів по роках";
const COST_BY_YEAR_TITLE: &str = "Загальна вартість по роках";
const BY_TYPE_TITLE: &str = "Розподіл за типом закупки";
const TOP_SUPPLIERS_TITLE: &str = "Топ-10 постачальників за сумою договорів";

struct StatsViewState {
    view: StatisticsView,
    is_dark: bool,
}

/// Custom-drawn statistics page: three bar charts and a pie chart.
pub struct StatsView {
    pub widget: Widget,
    state: Rc<RefCell<StatsViewState>>,
}

impl StatsView {
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(StatsViewState {
            view: StatisticsView::NoData,
            is_dark: false,
        }));

        let mut widget = Widget::default_fill();
        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_stats(wid, &st);
        });

        Self { widget, state }
    }

    pub fn set_view(&mut self, view: StatisticsView) {
        self.state.borrow_mut().view = view;
        self.widget.redraw();
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        self.state.borrow_mut().is_dark = is_dark;
        self.widget.redraw();
    }
}

impl Default for StatsView {
    fn default() -> Self {
        Self::new()
    }
}

fn series_color(index: usize) -> Color {
    let (r, g, b) = CHART_COLORS[index % CHART_COLORS.len()];
    Color::from_rgb(r, g, b)
}

fn draw_stats(wid: &Widget, st: &StatsViewState) {
    let (wx, wy, ww, wh) = (wid.x(), wid.y(), wid.w(), wid.h());
    let colors = palette(st.is_dark);

    draw::push_clip(wx, wy, ww, wh);
    draw::set_draw_color(colors.background);
    draw::draw_rectf(wx, wy, ww, wh);

    match &st.view {
        StatisticsView::NoData => {
            draw::set_draw_color(colors.text);
            draw::set_font(Font::HelveticaBold, 26);
            draw::draw_text2(NO_DATA_TITLE, wx, wy + wh / 2 - 40, ww, 36, Align::Center);
            draw::set_draw_color(colors.muted_text);
            draw::set_font(Font::Helvetica, 14);
            draw::draw_text2(NO_DATA_TEXT, wx, wy + wh / 2, ww, 24, Align::Center);
        }
        StatisticsView::Charts(stats) => draw_charts(wx, wy, ww, wh, &colors, stats),
    }

    draw::pop_clip();
}

fn draw_charts(wx: i32, wy: i32, ww: i32, wh: i32, colors: &Palette, stats: &Statistics) {
    draw::set_draw_color(colors.text);
    draw::set_font(Font::HelveticaBold, 22);
    draw::draw_text2(
        TITLE,
        wx + PANEL_GAP,
        wy,
        ww - 2 * PANEL_GAP,
        TITLE_HEIGHT,
        Align::Left | Align::Inside,
    );

    let grid_y = wy + TITLE_HEIGHT;
    let panel_w = (ww - 3 * PANEL_GAP) / 2;
    let panel_h = (wh - TITLE_HEIGHT - 2 * PANEL_GAP) / 2;
    let left = wx + PANEL_GAP;
    let right = left + panel_w + PANEL_GAP;
    let top = grid_y;
    let bottom = top + panel_h + PANEL_GAP;

    let count_bars: Vec<(String, f64)> = stats
        .count_by_year
        .iter()
        .map(|(year, count)| (year.to_string(), *count as f64))
        .collect();
    let (cx, cy, cw, ch) = draw_panel(left, top, panel_w, panel_h, colors, COUNT_BY_YEAR_TITLE);
    draw_vertical_bars(cx, cy, cw, ch, colors, &count_bars, series_color(4), |v| {
        format!("{}", v as u64)
    });

    let cost_bars: Vec<(String, f64)> = stats
        .cost_by_year
        .iter()
        .map(|(year, total)| (year.to_string(), *total))
        .collect();
    let (cx, cy, cw, ch) = draw_panel(right, top, panel_w, panel_h, colors, COST_BY_YEAR_TITLE);
    draw_vertical_bars(cx, cy, cw, ch, colors, &cost_bars, series_color(5), |v| {
        format!("{} грн", format_currency(v))
    });

    let slices: Vec<(String, f64)> = stats
        .count_by_type
        .iter()
        .map(|(kind, count)| (kind.display_name().to_string(), *count as f64))
        .collect();
    let (cx, cy, cw, ch) = draw_panel(left, bottom, panel_w, panel_h, colors, BY_TYPE_TITLE);
    draw_pie(cx, cy, cw, ch, colors, &slices);

    let (cx, cy, cw, ch) = draw_panel(right, bottom, panel_w, panel_h, colors, TOP_SUPPLIERS_TITLE);
    draw_horizontal_bars(cx, cy, cw, ch, colors, &stats.top_suppliers, series_color(0));
}

/// Panel background and title; returns the chart area inside it.
fn draw_panel(x: i32, y: i32, w: i32, h: i32, colors: &Palette, title: &str) -> (i32, i32, i32, i32) {
    draw::set_draw_color(colors.surface);
    draw::draw_rectf(x, y, w, h);
    draw::set_draw_color(colors.grid);
    draw::draw_rect(x, y, w, h);

    draw::set_draw_color(colors.text);
    draw::set_font(Font::HelveticaBold, 15);
    draw::draw_text2(
        title,
        x + PANEL_PADDING,
        y + PANEL_PADDING / 2,
        w - 2 * PANEL_PADDING,
        PANEL_TITLE_HEIGHT,
        Align::Left | Align::Inside,
    );

    (
        x + PANEL_PADDING,
        y + PANEL_PADDING + PANEL_TITLE_HEIGHT,
        w - 2 * PANEL_PADDING,
        h - 2 * PANEL_PADDING - PANEL_TITLE_HEIGHT,
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_vertical_bars(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    colors: &Palette,
    bars: &[(String, f64)],
    color: Color,
    value_label: impl Fn(f64) -> String,
) {
    if bars.is_empty() || w <= 0 || h <= 2 * AXIS_LABEL_HEIGHT {
        return;
    }
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let plot_h = h - 2 * AXIS_LABEL_HEIGHT;
    let base_y = y + AXIS_LABEL_HEIGHT + plot_h;
    let slot = w / bars.len() as i32;
    let bar_w = (slot * 3 / 5).max(4);

    draw::set_draw_color(colors.grid);
    draw::draw_line(x, base_y, x + w, base_y);

    draw::set_font(Font::Helvetica, 11);
    for (i, (label, value)) in bars.iter().enumerate() {
        let bar_h = if max > 0.0 { (value / max * plot_h as f64).round() as i32 } else { 0 };
        let bx = x + i as i32 * slot + (slot - bar_w) / 2;

        draw::set_draw_color(color);
        draw::draw_rectf(bx, base_y - bar_h, bar_w, bar_h);

        draw::set_draw_color(colors.muted_text);
        let slot_x = x + i as i32 * slot;
        draw::draw_text2(
            &value_label(*value),
            slot_x,
            base_y - bar_h - AXIS_LABEL_HEIGHT,
            slot,
            AXIS_LABEL_HEIGHT,
            Align::Center,
        );
        draw::draw_text2(label, slot_x, base_y, slot, AXIS_LABEL_HEIGHT, Align::Center);
    }
}

fn draw_horizontal_bars(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    colors: &Palette,
    bars: &[(String, f64)],
    color: Color,
) {
    if bars.is_empty() || w <= SUPPLIER_LABEL_WIDTH || h <= 0 {
        return;
    }
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let slot = h / bars.len() as i32;
    let bar_h = (slot * 3 / 5).max(3);
    let plot_x = x + SUPPLIER_LABEL_WIDTH;
    let plot_w = w - SUPPLIER_LABEL_WIDTH;

    draw::set_font(Font::Helvetica, 11);
    for (i, (name, total)) in bars.iter().enumerate() {
        let row_y = y + i as i32 * slot;
        let len = if max > 0.0 { (total / max * (plot_w - 90) as f64).round() as i32 } else { 0 };

        draw::set_draw_color(colors.muted_text);
        draw::push_clip(x, row_y, SUPPLIER_LABEL_WIDTH - 6, slot);
        draw::draw_text2(name, x, row_y, SUPPLIER_LABEL_WIDTH - 6, slot, Align::Right | Align::Inside);
        draw::pop_clip();

        draw::set_draw_color(color);
        draw::draw_rectf(plot_x, row_y + (slot - bar_h) / 2, len.max(1), bar_h);

        draw::set_draw_color(colors.muted_text);
        draw::draw_text2(
            &format_currency(*total),
            plot_x + len + 4,
            row_y,
            86,
            slot,
            Align::Left | Align::Inside,
        );
    }
}

fn draw_pie(x: i32, y: i32, w: i32, h: i32, colors: &Palette, slices: &[(String, f64)]) {
    let total: f64 = slices.iter().map(|(_, v)| *v).sum();
    if total <= 0.0 || w <= 0 || h <= 0 {
        return;
    }

    let legend_w = 140.min(w / 3);
    let diameter = (w - legend_w).min(h) - 8;
    if diameter <= 0 {
        return;
    }
    let px = x + (w - legend_w - diameter) / 2;
    let py = y + (h - diameter) / 2;

    // FLTK pie angles run counter-clockwise from 3 o'clock
    let mut start = 90.0;
    for (i, (_, value)) in slices.iter().enumerate() {
        let sweep = value / total * 360.0;
        draw::set_draw_color(series_color(i));
        draw::draw_pie(px, py, diameter, diameter, start, start + sweep);
        start += sweep;
    }

    draw::set_font(Font::Helvetica, 12);
    let lx = x + w - legend_w;
    for (i, (label, value)) in slices.iter().enumerate() {
        let ly = y + 8 + i as i32 * 22;
        draw::set_draw_color(series_color(i));
        draw::draw_rectf(lx, ly + 4, 12, 12);
        draw::set_draw_color(colors.text);
        draw::draw_text2(
            &format!("{} ({})", label, *value as u64),
            lx + 18,
            ly,
            legend_w - 18,
            20,
            Align::Left | Align::Inside,
        );
    }
}
