mod access;
mod field;
mod peripheral;
mod register;

pub use self::access::Access;
pub use self::field::FieldBuilder;
pub use self::peripheral::{PeripheralBuilder, DEFAULT_USAGE};
pub use self::register::RegisterBuilder;
use crate::element::{insert_unique, Element};
use crate::writer::Config;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Version of the CMSIS-SVD schema the documents conform to.
pub const SCHEMA_VERSION: &str = "1.1";

const XMLNS_XS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "CMSIS-SVD.xsd";

/// Byte order of the processor.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    /// Little endian memory.
    #[default]
    Little,
    /// Big endian memory.
    Big,
}

impl Endian {
    /// Returns the SVD text form.
    pub fn as_str(self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

/// Processor core description.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// The processor name.
    pub name: String,
    /// Hardware revision of the processor.
    pub revision: String,
    /// Endianness of the processor.
    pub endian: Endian,
    /// Whether the processor is equipped with a memory protection unit.
    pub mpu_present: bool,
    /// Whether the processor is equipped with a hardware floating point unit.
    pub fpu_present: bool,
    /// Whether the vector table offset register is implemented.
    pub vtor_present: bool,
    /// Number of bits available in the interrupt controller for configuring
    /// priority.
    pub nvic_prio_bits: u32,
    /// Whether the vendor provides its own system tick timer configuration.
    pub vendor_systick_config: bool,
    /// Number of interrupts handled by the interrupt controller.
    pub device_num_interrupts: u32,
}

impl Cpu {
    /// Creates a new processor description with the default core options.
    pub fn new(
        name: impl Into<String>,
        revision: impl Into<String>,
        device_num_interrupts: u32,
    ) -> Self {
        Self {
            name: name.into(),
            revision: revision.into(),
            endian: Endian::Little,
            mpu_present: false,
            fpu_present: false,
            vtor_present: true,
            nvic_prio_bits: 2,
            vendor_systick_config: false,
            device_num_interrupts,
        }
    }
}

/// Builder of the outermost `<device>` element of a description.
#[derive(Clone, Debug)]
pub struct DeviceBuilder {
    root: Element,
}

impl DeviceBuilder {
    /// Creates a new device description identified by `vendor`, `name` and
    /// the description `version`.
    pub fn new(vendor: &str, name: &str, version: &str) -> Self {
        let mut root = Element::new("device")
            .with_attribute("schemaVersion", SCHEMA_VERSION)
            .with_attribute("xmlns:xs", XMLNS_XS)
            .with_attribute("xs:noNamespaceSchemaLocation", SCHEMA_LOCATION);
        insert_unique(&mut root, "vendor", vendor);
        insert_unique(&mut root, "name", name);
        insert_unique(&mut root, "version", version);
        Self { root }
    }

    /// Returns the document tree built so far.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Sets the device description, joined into a single line.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        insert_unique(&mut self.root, "description", normalize_description(description));
        self
    }

    /// Sets the license text, kept verbatim.
    pub fn set_license(&mut self, license_text: &str) -> &mut Self {
        insert_unique(&mut self.root, "licenseText", license_text);
        self
    }

    /// Sets the bus `width` and the number of data bits per address.
    pub fn set_address_config(&mut self, width: u32, unit_bits: u32) -> &mut Self {
        insert_unique(&mut self.root, "addressUnitBits", unit_bits.to_string());
        insert_unique(&mut self.root, "width", width.to_string());
        self
    }

    /// Sets a 32-bit bus with byte addressing.
    pub fn set_default_address_config(&mut self) -> &mut Self {
        self.set_address_config(32, 8)
    }

    /// Sets the processor description. Only the first call has an effect.
    pub fn set_cpu(&mut self, cpu: &Cpu) -> &mut Self {
        if self.root.child("cpu").is_some() {
            debug!(name = %cpu.name, "cpu already described, ignoring");
            return self;
        }
        let element = self.root.push(Element::new("cpu"));
        insert_unique(element, "name", cpu.name.as_str());
        insert_unique(element, "revision", cpu.revision.as_str());
        insert_unique(element, "endian", cpu.endian.as_str());
        insert_unique(element, "mpuPresent", cpu.mpu_present.to_string());
        insert_unique(element, "fpuPresent", cpu.fpu_present.to_string());
        insert_unique(element, "vtorPresent", cpu.vtor_present.to_string());
        insert_unique(element, "nvicPrioBits", cpu.nvic_prio_bits.to_string());
        insert_unique(element, "vendorSystickConfig", cpu.vendor_systick_config.to_string());
        insert_unique(element, "deviceNumInterrupts", cpu.device_num_interrupts.to_string());
        self
    }

    /// Appends a new peripheral and returns its builder.
    ///
    /// `derived_from` names the peripheral to inherit data from. The name is
    /// not checked against the peripherals added so far.
    pub fn add_peripheral(
        &mut self,
        name: &str,
        version: &str,
        derived_from: Option<&str>,
    ) -> PeripheralBuilder<'_> {
        let peripherals = self.root.child_or_insert("peripherals");
        PeripheralBuilder::new(peripherals, name, version, derived_from)
    }

    /// Appends a new peripheral initialized by `f`.
    pub fn new_peripheral(
        &mut self,
        name: &str,
        version: &str,
        derived_from: Option<&str>,
        f: impl FnOnce(&mut PeripheralBuilder<'_>),
    ) -> &mut Self {
        f(&mut self.add_peripheral(name, version, derived_from));
        self
    }

    /// Writes the document to `output` formatted with `config`.
    pub fn write_to<W: Write>(&self, output: W, config: &Config) -> Result<()> {
        config.write_document(output, &self.root)
    }

    /// Renders the document into a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut output = Vec::new();
        self.write_to(&mut output, &Config::default())?;
        Ok(String::from_utf8(output)?)
    }

    /// Writes the document to the file at `path`.
    pub fn serialize<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.serialize_with(path, &Config::default())
    }

    /// Writes the document to the file at `path` formatted with `config`.
    pub fn serialize_with<P: AsRef<Path>>(&self, path: P, config: &Config) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create `{}`", path.display()))?;
        self.write_to(BufWriter::new(file), config)
            .wrap_err_with(|| format!("failed to write `{}`", path.display()))?;
        debug!(path = %path.display(), "SVD document written");
        Ok(())
    }
}

fn normalize_description(description: &str) -> String {
    description.replace('\n', "").split_whitespace().collect::<Vec<_>>().join(" ")
}
