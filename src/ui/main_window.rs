use adw::Application;
use adw::prelude::*;
use contact_directory::{Changes, DirectoryState, Event, OverlayState, Settings};
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::contact_list::ContactList;

/// The directory screen. Owns the state; every widget callback goes through
/// [`MainWindow::dispatch`].
pub struct MainWindow {
    window: adw::ApplicationWindow,
    toasts: adw::ToastOverlay,
    list: ContactList,
    state: RefCell<DirectoryState>,
}

impl MainWindow {
    pub fn window(&self) -> &adw::ApplicationWindow {
        &self.window
    }

    pub fn dispatch(self: &Rc<Self>, event: Event) {
        let changes = self.state.borrow_mut().apply(event);
        self.render(changes);
    }

    fn render(self: &Rc<Self>, changes: Changes) {
        if changes.visible {
            let state = self.state.borrow();
            self.list.set_items(&state.visible());
        }

        if let Some(id) = changes.created {
            let message = match self.state.borrow().store().get(id) {
                Some(contact) if !contact.name.is_empty() => format!("Added {}", contact.name),
                _ => "Contact added".to_string(),
            };
            self.toasts.add_toast(adw::Toast::new(&message));
        }

        if changes.overlay {
            // Clone out so no borrow is held while a dialog is being built.
            let overlay = self.state.borrow().overlay().clone();
            match overlay {
                OverlayState::Viewing(_) => {
                    let selected = self.state.borrow().selected().cloned();
                    if let Some(contact) = selected {
                        crate::ui::detail_dialog::present(self, &contact);
                    }
                }
                OverlayState::Creating(_) => crate::ui::create_dialog::present(self),
                OverlayState::None => {}
            }
        }
    }
}

pub fn show_main_window(
    app: &Application,
    settings: &Settings,
    state: DirectoryState,
) -> Rc<MainWindow> {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Contact List")
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let toasts = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 10);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let search = gtk::Entry::new();
    search.set_placeholder_text(Some("Search contacts"));
    search.set_primary_icon_name(Some("system-search-symbolic"));
    search.set_hexpand(true);
    root.append(&search);

    let list = ContactList::new();
    list.set_items(&state.visible());

    // Floating "+" control over the bottom-right corner of the list.
    let list_overlay = gtk::Overlay::new();
    list_overlay.set_vexpand(true);
    list_overlay.set_child(Some(&list.widget()));
    let add_btn = gtk::Button::with_label("+");
    add_btn.add_css_class("circular");
    add_btn.add_css_class("suggested-action");
    add_btn.set_tooltip_text(Some("New contact"));
    add_btn.set_halign(gtk::Align::End);
    add_btn.set_valign(gtk::Align::End);
    add_btn.set_margin_end(20);
    add_btn.set_margin_bottom(20);
    list_overlay.add_overlay(&add_btn);
    root.append(&list_overlay);

    toasts.set_child(Some(&root));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Contact List"));
    title.add_css_class("title-3");
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&toasts);
    window.set_content(Some(&container));

    let main = Rc::new(MainWindow {
        window: window.clone(),
        toasts,
        list,
        state: RefCell::new(state),
    });

    {
        let main = main.clone();
        search.connect_changed(move |entry| {
            main.dispatch(Event::SearchChanged(entry.text().to_string()));
        });
    }
    {
        let main_for_rows = main.clone();
        main.list.connect_contact_activated(move |id| {
            main_for_rows.dispatch(Event::RowActivated(id));
        });
    }
    {
        let main = main.clone();
        add_btn.connect_clicked(move |_| main.dispatch(Event::ToggleCreate));
    }

    // Clicking anywhere but a text field drops keyboard focus.
    {
        let click = gtk::GestureClick::new();
        let root_for_pick = root.clone();
        let window = window.clone();
        click.connect_pressed(move |_, _, x, y| {
            let on_input = root_for_pick
                .pick(x, y, gtk::PickFlags::DEFAULT)
                .is_some_and(|w| {
                    w.is::<gtk::Text>() || w.ancestor(gtk::Entry::static_type()).is_some()
                });
            if !on_input {
                gtk::prelude::GtkWindowExt::set_focus(&window, None::<&gtk::Widget>);
            }
        });
        root.add_controller(click);
    }

    window.present();
    main
}
