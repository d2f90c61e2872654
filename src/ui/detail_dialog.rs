use adw::prelude::*;
use contact_directory::{Contact, Event};
use gtk4 as gtk;
use std::rc::Rc;

use crate::ui::main_window::MainWindow;

pub fn present(main: &Rc<MainWindow>, contact: &Contact) {
    let dialog = gtk::Dialog::builder()
        .title("Contact")
        .transient_for(main.window())
        .modal(true)
        .default_width(300)
        .build();

    let content = gtk::Box::new(gtk::Orientation::Vertical, 6);
    content.set_margin_top(20);
    content.set_margin_bottom(20);
    content.set_margin_start(20);
    content.set_margin_end(20);

    let name = gtk::Label::new(Some(&contact.name));
    name.add_css_class("title-2");
    let number = gtk::Label::new(Some(&contact.number));
    number.set_selectable(true);
    content.append(&name);
    content.append(&number);
    dialog.content_area().append(&content);

    let _ = dialog.add_button("Close", gtk::ResponseType::Close);
    dialog.set_default_response(gtk::ResponseType::Close);

    let main = main.clone();
    dialog.connect_response(move |dlg, _| {
        main.dispatch(Event::CloseDetail);
        dlg.destroy();
    });

    dialog.present();
}
