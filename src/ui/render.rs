use crate::ui::add_dialog::render_add_dialog;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::item_list::render_item_list;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();
    let ui = app.ui_config();

    frame.render_widget(Header::new(&ui.title, state.items.len()).widget(), header);
    frame.render_widget(Clear, body);
    render_item_list(frame, body, &state.items, state.selected);
    frame.render_widget(Footer::new(state.is_dialog_open()).widget(footer), footer);

    render_add_dialog(frame, body, &state.dialog, ui.dialog_width);
}
