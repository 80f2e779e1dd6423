//! Pretty-printed XML output of an element tree.

use crate::element::Element;
use eyre::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Options to configure how a document is formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    indent_char: u8,
    indent_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates the default formatting: one tab per nesting level.
    pub fn new() -> Self {
        Self { indent_char: b'\t', indent_size: 1 }
    }

    /// Indents each nesting level with `size` repetitions of `indent_char`.
    pub fn indent(&mut self, indent_char: u8, size: usize) -> &mut Self {
        self.indent_char = indent_char;
        self.indent_size = size;
        self
    }

    /// Writes `root` as a complete UTF-8 document with an XML declaration.
    pub fn write_document<W: Write>(&self, output: W, root: &Element) -> Result<()> {
        let mut writer = Writer::new_with_indent(output, self.indent_char, self.indent_size);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut writer, root)?;
        let mut output = writer.into_inner();
        output.write_all(b"\n")?;
        output.flush()?;
        Ok(())
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag());
    for attribute in element.attributes() {
        start.push_attribute(attribute);
    }
    if element.text().is_none() && element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &Config, root: &Element) -> String {
        let mut output = Vec::new();
        config.write_document(&mut output, root).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn nested_elements_are_indented() {
        let mut root = Element::new("device").with_attribute("schemaVersion", "1.1");
        root.push(Element::with_text("name", "CHIP"));
        root.push(Element::new("peripherals")).push(Element::with_text("name", "UART0"));
        let xml = render(Config::new().indent(b' ', 2), &root);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <device schemaVersion=\"1.1\">\n  \
               <name>CHIP</name>\n  \
               <peripherals>\n    \
                 <name>UART0</name>\n  \
               </peripherals>\n\
             </device>\n"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let root = Element::with_text("licenseText", "a < b & c").with_attribute("note", "\"q\"");
        let xml = render(&Config::new(), &root);
        assert!(xml.contains("<licenseText note=\"&quot;q&quot;\">a &lt; b &amp; c</licenseText>"));
    }

    #[test]
    fn bare_element_is_empty_tag() {
        let xml = render(&Config::new(), &Element::new("cpu"));
        assert!(xml.ends_with("<cpu/>\n"));
    }
}
