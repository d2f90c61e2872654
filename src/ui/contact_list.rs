use contact_directory::{Contact, ContactId};
use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ContactList {
    root: gtk::ScrolledWindow,
    list: gtk::ListBox,
    // Ids of the rendered rows, by row index.
    ids: Rc<RefCell<Vec<ContactId>>>,
}

impl ContactList {
    pub fn new() -> Self {
        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");

        let placeholder = gtk::Label::new(Some("No contacts"));
        placeholder.add_css_class("dim-label");
        placeholder.set_margin_top(24);
        placeholder.set_margin_bottom(24);
        list.set_placeholder(Some(&placeholder));

        let root = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        root.set_child(Some(&list));

        Self {
            root,
            list,
            ids: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, items: &[&Contact]) {
        // The placeholder is a child of the list too; only rows are removed.
        let mut child = self.list.first_child();
        while let Some(widget) = child {
            child = widget.next_sibling();
            if let Some(row) = widget.downcast_ref::<gtk::ListBoxRow>() {
                self.list.remove(row);
            }
        }
        let mut ids = self.ids.borrow_mut();
        ids.clear();
        for contact in items {
            let row = gtk::ListBoxRow::new();
            row.set_activatable(true);

            let content = gtk::Box::new(gtk::Orientation::Vertical, 4);
            content.set_margin_top(10);
            content.set_margin_bottom(10);
            content.set_margin_start(12);
            content.set_margin_end(12);

            let name = gtk::Label::new(Some(&contact.name));
            name.add_css_class("heading");
            name.set_halign(gtk::Align::Start);
            let number = gtk::Label::new(Some(&contact.number));
            number.add_css_class("dim-label");
            number.set_halign(gtk::Align::Start);
            content.append(&name);
            content.append(&number);

            row.set_child(Some(&content));
            self.list.append(&row);
            ids.push(contact.id);
        }
    }

    pub fn connect_contact_activated<F>(&self, f: F)
    where
        F: Fn(ContactId) + 'static,
    {
        let ids = self.ids.clone();
        self.list.connect_row_activated(move |_, row| {
            let id = usize::try_from(row.index())
                .ok()
                .and_then(|idx| ids.borrow().get(idx).copied());
            if let Some(id) = id {
                f(id);
            }
        });
    }
}
