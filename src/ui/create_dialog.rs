use adw::prelude::*;
use contact_directory::Event;
use gtk4 as gtk;
use std::rc::Rc;

use crate::ui::main_window::MainWindow;

/// Creation form. Entries start empty; every edit is mirrored into the draft.
pub fn present(main: &Rc<MainWindow>) {
    let dialog = gtk::Dialog::builder()
        .title("New Contact")
        .transient_for(main.window())
        .modal(true)
        .default_width(320)
        .build();

    let form = gtk::Box::new(gtk::Orientation::Vertical, 8);
    form.set_margin_top(12);
    form.set_margin_bottom(12);
    form.set_margin_start(12);
    form.set_margin_end(12);

    let name_entry = gtk::Entry::new();
    name_entry.set_placeholder_text(Some("Name"));
    name_entry.set_hexpand(true);

    let number_entry = gtk::Entry::new();
    number_entry.set_placeholder_text(Some("Phone Number"));
    number_entry.set_input_purpose(gtk::InputPurpose::Phone);
    number_entry.set_hexpand(true);

    form.append(&name_entry);
    form.append(&number_entry);
    dialog.content_area().append(&form);

    let _ = dialog.add_button("Cancel", gtk::ResponseType::Cancel);
    let create_btn = dialog.add_button("Create Contact", gtk::ResponseType::Ok);
    create_btn.add_css_class("suggested-action");
    dialog.set_default_response(gtk::ResponseType::Ok);

    {
        let main = main.clone();
        name_entry.connect_changed(move |entry| {
            main.dispatch(Event::DraftNameChanged(entry.text().to_string()));
        });
    }
    {
        let main = main.clone();
        number_entry.connect_changed(move |entry| {
            main.dispatch(Event::DraftNumberChanged(entry.text().to_string()));
        });
    }

    // Enter in either field confirms
    for entry in [&name_entry, &number_entry] {
        let dialog = dialog.clone();
        entry.connect_activate(move |_| dialog.response(gtk::ResponseType::Ok));
    }

    {
        let main = main.clone();
        dialog.connect_response(move |dlg, resp| {
            let event = if resp == gtk::ResponseType::Ok {
                Event::ConfirmCreate
            } else {
                Event::CancelCreate
            };
            main.dispatch(event);
            dlg.destroy();
        });
    }

    dialog.present();
    name_entry.grab_focus();
}
