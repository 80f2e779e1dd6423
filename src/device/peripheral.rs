use super::register::RegisterBuilder;
use crate::element::{insert_unique, Element};

/// Default usage of an address block.
pub const DEFAULT_USAGE: &str = "registers";

/// Builder of a `<peripheral>` element.
#[derive(Debug)]
pub struct PeripheralBuilder<'a> {
    name: String,
    element: &'a mut Element,
}

impl<'a> PeripheralBuilder<'a> {
    pub(super) fn new(
        peripherals: &'a mut Element,
        name: &str,
        version: &str,
        derived_from: Option<&str>,
    ) -> Self {
        let mut peripheral = Element::new("peripheral");
        if let Some(derived_from) = derived_from {
            peripheral = peripheral.with_attribute("derivedFrom", derived_from);
        }
        let element = peripherals.push(peripheral);
        insert_unique(element, "name", name);
        insert_unique(element, "version", version);
        Self { name: name.to_owned(), element }
    }

    /// Returns the peripheral name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the lowest address reserved or used by the peripheral.
    pub fn set_base_address(&mut self, address: u64) -> &mut Self {
        insert_unique(self.element, "baseAddress", format!("{address:#x}"));
        self
    }

    /// Sets the default bit-width of registers contained in the peripheral.
    pub fn set_size(&mut self, size: u64) -> &mut Self {
        insert_unique(self.element, "size", format!("{size:#x}"));
        self
    }

    /// Appends an address block used for registers.
    pub fn add_address_block(&mut self, offset: u64, size: u64) -> &mut Self {
        self.add_address_block_with_usage(offset, size, DEFAULT_USAGE)
    }

    /// Appends an address block with an explicit `usage`.
    pub fn add_address_block_with_usage(
        &mut self,
        offset: u64,
        size: u64,
        usage: &str,
    ) -> &mut Self {
        let block = self.element.push(Element::new("addressBlock"));
        insert_unique(block, "offset", format!("{offset:#x}"));
        insert_unique(block, "size", format!("{size:#x}"));
        insert_unique(block, "usage", usage);
        self
    }

    /// Appends an interrupt named after the peripheral with the index
    /// `number`.
    pub fn add_interrupt(&mut self, number: u32) -> &mut Self {
        let interrupt = self.element.push(Element::new("interrupt"));
        insert_unique(interrupt, "name", format!("{} IRQ", self.name));
        insert_unique(interrupt, "value", number.to_string());
        self
    }

    /// Appends a new register named `name` and returns its builder.
    pub fn add_register(&mut self, name: &str) -> RegisterBuilder<'_> {
        RegisterBuilder::new(self.element.child_or_insert("registers"), name)
    }

    /// Appends a new register named `name` initialized by `f`.
    pub fn new_register(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut RegisterBuilder<'_>),
    ) -> &mut Self {
        f(&mut self.add_register(name));
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
    fn derived_from_is_an_attribute() {
        let mut peripherals = Element::new("peripherals");
        PeripheralBuilder::new(&mut peripherals, "UART1", "1.0", Some("UART0"));
        PeripheralBuilder::new(&mut peripherals, "UART0", "1.0", None);
        let [uart1, uart0] = peripherals.children() else { panic!("expected two peripherals") };
        assert_eq!(uart1.attribute("derivedFrom"), Some("UART0"));
        assert_eq!(uart0.attribute("derivedFrom"), None);
    }

    #[test]
    fn geometry_is_hexadecimal() {
        let mut peripherals = Element::new("peripherals");
        PeripheralBuilder::new(&mut peripherals, "TIMER", "2", None)
            .set_base_address(4096)
            .set_size(32)
            .set_base_address(8192);
        let peripheral = &peripherals.children()[0];
        assert_eq!(text(peripheral, "baseAddress"), Some("0x1000"));
        assert_eq!(text(peripheral, "size"), Some("0x20"));
    }

    #[test]
    fn address_blocks_append() {
        let mut peripherals = Element::new("peripherals");
        PeripheralBuilder::new(&mut peripherals, "GPIO", "1", None)
            .add_address_block(0, 0x400)
            .add_address_block_with_usage(0x400, 0x10, "reserved");
        let blocks = peripherals.children()[0].children_named("addressBlock").collect::<Vec<_>>();
        assert_eq!(blocks.len(), 2);
        assert_eq!(text(blocks[0], "offset"), Some("0x0"));
        assert_eq!(text(blocks[0], "size"), Some("0x400"));
        assert_eq!(text(blocks[0], "usage"), Some("registers"));
        assert_eq!(text(blocks[1], "usage"), Some("reserved"));
    }

    #[test]
    fn interrupt_is_named_after_peripheral() {
        let mut peripherals = Element::new("peripherals");
        PeripheralBuilder::new(&mut peripherals, "UART0", "1", None)
            .add_interrupt(42)
            .add_interrupt(43);
        let interrupts =
            peripherals.children()[0].children_named("interrupt").collect::<Vec<_>>();
        assert_eq!(text(interrupts[0], "name"), Some("UART0 IRQ"));
        assert_eq!(text(interrupts[0], "value"), Some("42"));
        assert_eq!(text(interrupts[1], "value"), Some("43"));
    }
}
