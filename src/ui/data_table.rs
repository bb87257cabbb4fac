use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    draw,
    enums::{Align, Color, Cursor, Event, Font},
    prelude::*,
    table::{Table, TableContext, TableResizeFlag},
};

use super::theme::{Palette, bold_font_for_family, font_for_family, palette};
use crate::app::controllers::table::{
    CellContent, ResizeDrag, SortDirection, TableBody, TableEvent, TableModel,
};
use crate::app::domain::{Message, TableId};

const NUMBER_COL_WIDTH: i32 = 40;
const ACTIONS_COL_WIDTH: i32 = 100;
const HEADER_HEIGHT: i32 = 32;
const ROW_PADDING: i32 = 14;
const CELL_PADDING: i32 = 6;
const SORT_ARROW: i32 = 4;

const NUMBER_LABEL: &str = "#";
const ACTIONS_LABEL: &str = "Дії";
const EDIT_LABEL: &str = "Ред.";
const DELETE_LABEL: &str = "\u{00d7}";
const LINK_LABEL: &str = "Відкрити";
const FILE_LABEL: &str = "Файл";

/// Where a column index of the widget points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Number,
    Data(usize),
    Actions,
}

struct DataTableState {
    model: TableModel,
    table_id: TableId,
    sender: Sender<Message>,
    resizable: bool,
    is_dark: bool,
    font: Font,
    bold_font: Font,
    font_size: i32,
    drag: Option<ResizeDrag>,
    /// Last valid width reported while dragging
    pending_resize: Option<TableEvent>,
}

impl DataTableState {
    fn data_columns(&self) -> usize {
        self.model.headers.len()
    }

    fn column(&self, col: i32) -> Option<Column> {
        let data = self.data_columns() as i32;
        match col {
            0 => Some(Column::Number),
            c if c >= 1 && c <= data => Some(Column::Data((c - 1) as usize)),
            c if c == data + 1 => Some(Column::Actions),
            _ => None,
        }
    }

    fn send(&self, event: TableEvent) {
        self.sender.send(Message::Table(self.table_id, event));
    }
}

/// Table widget that paints a `TableModel` and reports interaction as
/// `Message::Table` events. It never edits data itself.
pub struct DataTable {
    pub widget: Table,
    state: Rc<RefCell<DataTableState>>,
}

impl DataTable {
    pub fn new(table_id: TableId, resizable: bool, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(DataTableState {
            model: TableModel::default(),
            table_id,
            sender,
            resizable,
            is_dark: false,
            font: Font::Helvetica,
            bold_font: Font::HelveticaBold,
            font_size: 14,
            drag: None,
            pending_resize: None,
        }));

        let mut widget = Table::default_fill();
        widget.set_row_header(false);
        widget.set_col_header(true);
        widget.set_col_header_height(HEADER_HEIGHT);
        // Needed for cursor2rowcol to report header edges; the handle
        // closure consumes the push, so FLTK never resizes on its own.
        widget.set_col_resize(resizable);
        widget.end();

        let draw_state = state.clone();
        widget.draw_cell(move |t, ctx, row, col, x, y, w, h| {
            let st = draw_state.borrow();
            draw_table_cell(t, &st, ctx, row, col, x, y, w, h);
        });

        let handle_state = state.clone();
        widget.handle(move |t, event| handle_data_table(t, event, &handle_state));

        Self { widget, state }
    }

    /// Replace the displayed frame and lay out rows and columns for it.
    pub fn set_model(&mut self, model: TableModel) {
        let row_height = self.state.borrow().font_size + ROW_PADDING;
        let widths: Vec<i32> = model.headers.iter().map(|h| h.width as i32).collect();
        let rows = model.row_count() as i32;

        self.state.borrow_mut().model = model;

        self.widget.set_cols(widths.len() as i32 + 2);
        self.widget.set_rows(rows);
        self.widget.set_row_height_all(row_height);
        self.widget.set_col_width(0, NUMBER_COL_WIDTH);
        for (i, width) in widths.iter().enumerate() {
            self.widget.set_col_width(i as i32 + 1, *width);
        }
        self.widget.set_col_width(widths.len() as i32 + 1, ACTIONS_COL_WIDTH);
        self.widget.redraw();
    }

    pub fn set_font(&mut self, family: &str, size: u32) {
        {
            let mut st = self.state.borrow_mut();
            st.font = font_for_family(family);
            st.bold_font = bold_font_for_family(family);
            st.font_size = size as i32;
        }
        self.widget.set_row_height_all(size as i32 + ROW_PADDING);
        self.widget.redraw();
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        self.state.borrow_mut().is_dark = is_dark;
        let colors = palette(is_dark);
        self.widget.set_color(colors.surface);
        self.widget.redraw();
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_table_cell(
    t: &Table,
    st: &DataTableState,
    ctx: TableContext,
    row: i32,
    col: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let colors = palette(st.is_dark);
    match ctx {
        TableContext::StartPage => draw::set_font(st.font, st.font_size),
        TableContext::ColHeader => {
            draw::push_clip(x, y, w, h);
            draw_header_cell(st, &colors, col, x, y, w, h);
            draw::pop_clip();
        }
        TableContext::Cell => {
            draw::push_clip(x, y, w, h);
            match &st.model.body {
                TableBody::Placeholder(text) => draw_placeholder(t, st, &colors, text, y, h),
                TableBody::Rows(_) => draw_body_cell(st, &colors, row, col, x, y, w, h),
            }
            draw::pop_clip();
        }
        _ => {}
    }
}

fn draw_header_cell(st: &DataTableState, colors: &Palette, col: i32, x: i32, y: i32, w: i32, h: i32) {
    draw::set_draw_color(colors.header_bg);
    draw::draw_rectf(x, y, w, h);
    draw::set_draw_color(colors.grid);
    draw::draw_rect(x, y, w, h);

    let (label, sort) = match st.column(col) {
        Some(Column::Number) => (NUMBER_LABEL, None),
        Some(Column::Actions) => (ACTIONS_LABEL, None),
        Some(Column::Data(i)) => {
            let header = &st.model.headers[i];
            (header.label.as_str(), header.sort)
        }
        None => return,
    };

    draw::set_font(st.bold_font, st.font_size - 2);
    draw::set_draw_color(colors.muted_text);
    let text_w = w - 2 * CELL_PADDING - if sort.is_some() { 3 * SORT_ARROW } else { 0 };
    draw::draw_text2(label, x + CELL_PADDING, y, text_w, h, Align::Left | Align::Inside);

    if let Some(direction) = sort {
        let cx = x + w - CELL_PADDING - SORT_ARROW;
        let cy = y + h / 2;
        draw::set_draw_color(colors.accent);
        match direction {
            SortDirection::Ascending => draw::draw_polygon(
                cx - SORT_ARROW,
                cy + SORT_ARROW / 2,
                cx + SORT_ARROW,
                cy + SORT_ARROW / 2,
                cx,
                cy - SORT_ARROW,
            ),
            SortDirection::Descending => draw::draw_polygon(
                cx - SORT_ARROW,
                cy - SORT_ARROW / 2,
                cx + SORT_ARROW,
                cy - SORT_ARROW / 2,
                cx,
                cy + SORT_ARROW,
            ),
        }
    }
}

/// The placeholder spans every column: each cell paints its slice of the
/// centered text.
fn draw_placeholder(t: &Table, st: &DataTableState, colors: &Palette, text: &str, y: i32, h: i32) {
    let Some((row_x, _, _, _)) = t.find_cell(TableContext::Cell, 0, 0) else {
        return;
    };
    let row_w: i32 = (0..t.cols()).map(|c| t.col_width(c)).sum();

    draw::set_draw_color(colors.surface);
    draw::draw_rectf(row_x, y, row_w, h);
    draw::set_draw_color(colors.grid);
    draw::draw_rect(row_x, y, row_w, h);
    draw::set_font(st.font, st.font_size);
    draw::set_draw_color(colors.muted_text);
    draw::draw_text2(text, row_x, y, row_w, h, Align::Center);
}

#[allow(clippy::too_many_arguments)]
fn draw_body_cell(st: &DataTableState, colors: &Palette, row: i32, col: i32, x: i32, y: i32, w: i32, h: i32) {
    let Some(row_model) = st.model.row(row as usize) else {
        return;
    };

    let bg = if row_model.selected { colors.selected_row } else { colors.surface };
    draw::set_draw_color(bg);
    draw::draw_rectf(x, y, w, h);
    draw::set_draw_color(colors.grid);
    draw::draw_rect(x, y, w, h);
    draw::set_font(st.font, st.font_size);

    match st.column(col) {
        Some(Column::Number) => {
            draw::set_draw_color(colors.text);
            draw::draw_text2(&row_model.number.to_string(), x, y, w, h, Align::Center);
        }
        Some(Column::Actions) => {
            let half = w / 2;
            draw::set_draw_color(colors.accent);
            draw::draw_text2(EDIT_LABEL, x, y, half, h, Align::Center);
            draw::set_draw_color(colors.danger);
            draw::set_font(st.bold_font, st.font_size + 4);
            draw::draw_text2(DELETE_LABEL, x + half, y, w - half, h, Align::Center);
        }
        Some(Column::Data(i)) => match row_model.cells.get(i) {
            Some(CellContent::Check(checked)) => draw_check(colors, *checked, x, y, w, h),
            Some(CellContent::Link(_)) => draw_affordance(colors, LINK_LABEL, x, y, w, h),
            Some(CellContent::File(_)) => draw_affordance(colors, FILE_LABEL, x, y, w, h),
            Some(CellContent::Missing) => {
                draw::set_draw_color(colors.muted_text);
                draw::draw_text2(CellContent::Missing.display_text(), x, y, w, h, Align::Center);
            }
            Some(CellContent::Text(text)) => {
                draw::set_draw_color(colors.text);
                draw::draw_text2(
                    text,
                    x + CELL_PADDING,
                    y,
                    w - 2 * CELL_PADDING,
                    h,
                    Align::Left | Align::Inside,
                );
            }
            None => {}
        },
        None => {}
    }
}

fn draw_check(colors: &Palette, checked: bool, x: i32, y: i32, w: i32, h: i32) {
    let size = 14;
    let bx = x + (w - size) / 2;
    let by = y + (h - size) / 2;
    if checked {
        draw::set_draw_color(colors.accent);
        draw::draw_rectf(bx, by, size, size);
        draw::set_draw_color(Color::White);
        draw::set_line_style(draw::LineStyle::Solid, 2);
        draw::draw_line(bx + 3, by + 7, bx + 6, by + 10);
        draw::draw_line(bx + 6, by + 10, bx + 11, by + 4);
        draw::set_line_style(draw::LineStyle::Solid, 0);
    } else {
        draw::set_draw_color(colors.muted_text);
        draw::draw_rect(bx, by, size, size);
    }
}

fn draw_affordance(colors: &Palette, label: &str, x: i32, y: i32, w: i32, h: i32) {
    draw::set_draw_color(colors.link);
    draw::draw_text2(label, x, y, w, h, Align::Center);
    let (text_w, _) = draw::measure(label, false);
    let ux = x + (w - text_w) / 2;
    let uy = y + h / 2 + draw::height() / 2 - 1;
    draw::draw_line(ux, uy, ux + text_w, uy);
}

/// Header edge under the pointer, as the data column it resizes
fn resize_target(st: &DataTableState, col: i32, flag: TableResizeFlag) -> Option<usize> {
    edge_column(st.resizable, st.data_columns(), col, flag)
}

/// Data column whose right edge sits at `col`/`flag`. The number and
/// actions columns never resize.
fn edge_column(resizable: bool, data_columns: usize, col: i32, flag: TableResizeFlag) -> Option<usize> {
    if !resizable {
        return None;
    }
    let target = match flag {
        TableResizeFlag::ColRight => col,
        TableResizeFlag::ColLeft => col - 1,
        _ => return None,
    };
    if target >= 1 && target <= data_columns as i32 {
        Some((target - 1) as usize)
    } else {
        None
    }
}

fn set_cursor(t: &Table, cursor: Cursor) {
    if let Some(mut win) = t.window() {
        win.set_cursor(cursor);
    }
}

fn handle_data_table(t: &mut Table, event: Event, state: &Rc<RefCell<DataTableState>>) -> bool {
    match event {
        Event::Move => {
            let st = state.borrow();
            let over_edge = matches!(
                t.cursor2rowcol(),
                Some((TableContext::ColHeader, col, _, flag)) if resize_target(&st, col, flag).is_some()
            );
            set_cursor(t, if over_edge { Cursor::WE } else { Cursor::Default });
            false
        }
        Event::Push => {
            if app::event_button() != 1 {
                return false;
            }
            let Some((ctx, row, col, flag)) = t.cursor2rowcol() else {
                return false;
            };
            match ctx {
                TableContext::ColHeader => handle_header_push(t, state, col, flag),
                TableContext::Cell => {
                    handle_cell_push(t, &state.borrow(), row, col);
                    true
                }
                _ => false,
            }
        }
        Event::Drag => {
            let mut st = state.borrow_mut();
            let Some(drag) = st.drag else {
                return false;
            };
            if let Some(TableEvent::ColumnResized { width, .. }) = drag.event_at(app::event_x()) {
                let col = st
                    .model
                    .headers
                    .iter()
                    .position(|h| h.key == drag.column)
                    .map(|i| i as i32 + 1);
                if let Some(col) = col {
                    t.set_col_width(col, width as i32);
                    t.redraw();
                }
                st.pending_resize = Some(TableEvent::ColumnResized {
                    column: drag.column,
                    width,
                });
            }
            true
        }
        Event::Released => {
            let mut st = state.borrow_mut();
            if st.drag.take().is_none() {
                return false;
            }
            if let Some(resized) = st.pending_resize.take() {
                st.send(resized);
            }
            set_cursor(t, Cursor::Default);
            true
        }
        _ => false,
    }
}

fn handle_header_push(t: &Table, state: &Rc<RefCell<DataTableState>>, col: i32, flag: TableResizeFlag) -> bool {
    let mut st = state.borrow_mut();
    if let Some(index) = resize_target(&st, col, flag) {
        let key = st.model.headers[index].key;
        let width = t.col_width(index as i32 + 1).max(0) as u32;
        st.drag = Some(ResizeDrag::new(key, app::event_x(), width));
        st.pending_resize = None;
        return true;
    }
    if let Some(Column::Data(index)) = st.column(col) {
        st.send(TableEvent::SortRequested(st.model.headers[index].key));
        return true;
    }
    false
}

fn handle_cell_push(t: &Table, st: &DataTableState, row: i32, col: i32) {
    let Some(row_model) = st.model.row(row as usize) else {
        return;
    };
    let id = row_model.id.clone();

    match st.column(col) {
        Some(Column::Actions) => {
            let Some((cx, _, cw, _)) = t.find_cell(TableContext::Cell, row, col) else {
                return;
            };
            if app::event_x() < cx + cw / 2 {
                st.send(TableEvent::EditRequested(id));
            } else {
                st.send(TableEvent::DeleteRequested(id));
            }
        }
        Some(Column::Data(i)) => match row_model.cells.get(i) {
            Some(CellContent::Link(url)) => st.send(TableEvent::OpenLink(url.clone())),
            Some(CellContent::File(_)) => st.send(TableEvent::OpenFile(id)),
            _ => send_row_click(st, id),
        },
        _ => send_row_click(st, id),
    }
}

fn send_row_click(st: &DataTableState, id: String) {
    if app::event_clicks() {
        st.send(TableEvent::EditRequested(id));
    } else {
        st.send(TableEvent::RowSelected(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_column_maps_both_sides_of_a_border() {
        // Border between data columns 0 and 1 (widget columns 1 and 2)
        assert_eq!(edge_column(true, 3, 1, TableResizeFlag::ColRight), Some(0));
        assert_eq!(edge_column(true, 3, 2, TableResizeFlag::ColLeft), Some(0));
        assert_eq!(edge_column(true, 3, 3, TableResizeFlag::ColRight), Some(2));
    }

    #[test]
    fn test_edge_column_skips_fixed_columns() {
        assert_eq!(edge_column(true, 3, 0, TableResizeFlag::ColRight), None);
        assert_eq!(edge_column(true, 3, 1, TableResizeFlag::ColLeft), None);
        assert_eq!(edge_column(true, 3, 4, TableResizeFlag::ColRight), None);
    }

    #[test]
    fn test_edge_column_needs_an_edge_and_a_resizable_table() {
        assert_eq!(edge_column(true, 3, 1, TableResizeFlag::None), None);
        assert_eq!(edge_column(false, 3, 1, TableResizeFlag::ColRight), None);
    }
}
