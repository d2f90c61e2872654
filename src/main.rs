mod app;
mod ui;

use adw::Application;
use adw::prelude::*;

fn main() -> gtk4::glib::ExitCode {
    let settings = crate::app::startup();
    let app = Application::builder()
        .application_id("com.example.ContactDirectory")
        .build();
    app.connect_activate(move |app| {
        crate::app::build_ui(app, &settings);
    });
    app.run()
}
