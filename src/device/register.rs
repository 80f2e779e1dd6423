use super::field::FieldBuilder;
use crate::element::{insert_unique, Element};

/// Builder of a `<register>` element.
#[derive(Debug)]
pub struct RegisterBuilder<'a> {
    name: String,
    element: &'a mut Element,
}

impl<'a> RegisterBuilder<'a> {
    pub(super) fn new(registers: &'a mut Element, name: &str) -> Self {
        let element = registers.push(Element::new("register"));
        insert_unique(element, "name", name);
        Self { name: name.to_owned(), element }
    }

    /// Returns the register name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the address offset relative to the peripheral base address.
    pub fn set_offset_address(&mut self, offset: u64) -> &mut Self {
        insert_unique(self.element, "addressOffset", format!("{offset:#x}"));
        self
    }

    /// Sets the value of the register at RESET.
    pub fn set_reset_value(&mut self, value: u64) -> &mut Self {
        insert_unique(self.element, "resetValue", format!("{value:#x}"));
        self
    }

    /// Appends a new field named `name` and returns its builder.
    pub fn add_field(&mut self, name: &str) -> FieldBuilder<'_> {
        FieldBuilder::new(self.element.child_or_insert("fields"), name)
    }

    /// Appends a new field named `name` initialized by `f`.
    pub fn new_field(&mut self, name: &str, f: impl FnOnce(&mut FieldBuilder<'_>)) -> &mut Self {
        f(&mut self.add_field(name));
        self
    }
}
