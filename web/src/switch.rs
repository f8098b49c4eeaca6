use crate::dom::*;
use crate::media::*;
use crate::storage::*;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use themeswitch_core::*;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

pub type BrowserController = ThemeController<DocumentTheme, CheckboxToggle, LocalStore, MediaSignal>;

/// A controller wired to the live page.
///
/// Dropping it unregisters both listeners, the document keeps whatever theme was last applied.
pub struct ThemeSwitch {
    controller: Rc<RefCell<BrowserController>>,
    toggle_listener: EventListener,
    scheme_listener: Option<EventListener>,
}

impl ThemeSwitch {
    pub fn install(config: &ThemeConfig) -> Result<Self> {
        let toggle = CheckboxToggle::find(&config.toggle_id)?;
        let input = toggle.input().clone();
        let signal = MediaSignal::new();
        let query = signal.query().cloned();

        let mut controller = ThemeController::new(
            DocumentTheme::new(config.attribute.as_str()),
            toggle,
            LocalStore::new(config.storage_key.as_str()),
            signal,
        );
        controller.initialize();
        let controller = Rc::new(RefCell::new(controller));

        let toggle_listener = {
            let controller = controller.clone();
            let target = input.clone();
            EventListener::new(&input, "change", move |_| {
                controller.borrow_mut().on_toggle_changed(target.checked());
            })
        };

        let scheme_listener = query.map(|query| {
            let controller = controller.clone();
            let target = query.clone();
            EventListener::new(&query, "change", move |event| {
                let prefers_dark = event
                    .dyn_ref::<MediaQueryListEvent>()
                    .map_or_else(|| target.matches(), MediaQueryListEvent::matches);
                controller
                    .borrow_mut()
                    .on_system_preference_changed(prefers_dark);
            })
        });

        log::debug!("theme switch installed on #{}", config.toggle_id);
        Ok(Self {
            controller,
            toggle_listener,
            scheme_listener,
        })
    }

    pub fn theme(&self) -> Option<Theme> {
        self.controller.borrow().resolve()
    }

    pub fn controller(&self) -> &Rc<RefCell<BrowserController>> {
        &self.controller
    }

    /// Keep the listeners registered for the rest of the page's life.
    pub fn forget(self) {
        self.toggle_listener.forget();
        if let Some(listener) = self.scheme_listener {
            listener.forget();
        }
    }
}
