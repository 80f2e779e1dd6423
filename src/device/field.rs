use super::access::Access;
use crate::element::{insert_unique, Element};

/// Builder of a `<field>` element: a named bit range within a register.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    name: String,
    element: &'a mut Element,
}

impl<'a> FieldBuilder<'a> {
    pub(super) fn new(fields: &'a mut Element, name: &str) -> Self {
        let element = fields.push(Element::new("field"));
        insert_unique(element, "name", name);
        Self { name: name.to_owned(), element }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the bit range as `[last_bit:first_bit]`, most significant bit
    /// first.
    pub fn set_bit_range(&mut self, first_bit: u32, last_bit: u32) -> &mut Self {
        insert_unique(self.element, "bitRange", format!("[{last_bit}:{first_bit}]"));
        self
    }

    /// Sets the access rights derived from the `readable`/`writable` pair.
    pub fn set_access_permission(&mut self, readable: bool, writable: bool) -> &mut Self {
        self.set_access(Access::from_permissions(readable, writable))
    }

    /// Sets the access rights.
    pub fn set_access(&mut self, access: Access) -> &mut Self {
        insert_unique(self.element, "access", access.as_str());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<'e>(element: &'e Element, tag: &str) -> Option<&'e str> {
        element.child(tag).and_then(Element::text)
    }

    #[test]
    fn bit_range_is_high_bit_first() {
        let mut fields = Element::new("fields");
        FieldBuilder::new(&mut fields, "EN").set_bit_range(0, 7);
        assert_eq!(text(&fields.children()[0], "bitRange"), Some("[7:0]"));
    }

    #[test]
    fn access_is_set_once() {
        let mut fields = Element::new("fields");
        FieldBuilder::new(&mut fields, "EN")
            .set_access_permission(true, false)
            .set_access_permission(true, true);
        let field = &fields.children()[0];
        assert_eq!(text(field, "access"), Some("read-only"));
        assert_eq!(field.children_named("access").count(), 1);
    }
}
