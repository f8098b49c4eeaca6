use gloo::utils::{document, document_element};
use themeswitch_core::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// Writes the theme as an attribute on `<html>`, where the stylesheet picks it up.
#[derive(Clone, Debug)]
pub struct DocumentTheme {
    html: Element,
    attribute: String,
}

impl DocumentTheme {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            html: document_element(),
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Theme currently on the document, `None` when unset or not one we recognize.
    pub fn current(&self) -> Option<Theme> {
        self.html
            .get_attribute(&self.attribute)
            .and_then(|scheme| scheme.parse().ok())
    }
}

impl ThemeSink for DocumentTheme {
    fn apply(&mut self, theme: Theme) -> Result<()> {
        let scheme = theme.scheme();
        log::debug!("theme-scheme: {}", scheme);
        self.html
            .set_attribute(&self.attribute, scheme)
            .map_err(|err| ThemeError::Attribute(format!("{:?}", err)))
    }
}

#[derive(Clone, Debug)]
pub struct CheckboxToggle {
    input: HtmlInputElement,
}

impl CheckboxToggle {
    pub fn find(id: &str) -> Result<Self> {
        document()
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| Self { input })
            .ok_or_else(|| ThemeError::MissingControl(id.to_string()))
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl ToggleControl for CheckboxToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.input.set_checked(checked);
    }
}
