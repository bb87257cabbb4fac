use fltk::{app, prelude::*};

use contract_desk::app::infrastructure::logging;
use contract_desk::app::{AppState, FileStore, Message, PersistenceGateway};
use contract_desk::ui::main_window::build_main_window;
use contract_desk::ui::menu::build_menu;
use contract_desk::ui::shell::Shell;

fn main() {
    logging::init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let store = FileStore::default_location();
    tracing::info!(dir = %store.dir().display(), "Using data directory");
    let state = AppState::load(PersistenceGateway::new(store));

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, state.settings().theme.is_dark());

    // Closing the window goes through the same path as File/Quit
    widgets.wind.set_callback(move |_| {
        if app::event() == fltk::enums::Event::Close {
            sender.send(Message::Quit);
        }
    });

    let mut shell = Shell::new(state, widgets);
    shell.show();

    while app.wait() {
        if let Some(msg) = receiver.recv()
            && !shell.dispatch(msg)
        {
            break;
        }
    }
    tracing::info!("Exiting");
}
