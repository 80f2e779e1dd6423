//! CMSIS-SVD encoder.
//!
//! Builds System View Description documents programmatically, which is useful
//! when translating other chip description formats into SVD. The document is
//! assembled through nested builders following the SVD hierarchy: device,
//! peripheral, register and field. Setting an element that is already present
//! in the same scope keeps the first value.
//!
//! # Usage
//!
//! Place the following to the Cargo.toml:
//!
//! ```toml
//! [dependencies]
//! cmsis-svd-encoder = { version = "0.1.0" }
//! ```
//!
//! ```
//! use cmsis_svd_encoder::{Cpu, DeviceBuilder};
//!
//! let mut device = DeviceBuilder::new("Acme", "ACM32", "1.0");
//! device.set_description("Acme 32-bit\nmicrocontroller").set_default_address_config();
//! device.set_cpu(&Cpu::new("CM4", "r0p1", 48));
//! let mut uart = device.add_peripheral("UART0", "1.0", None);
//! uart.set_base_address(0x4000_0000).add_address_block(0, 0x400).add_interrupt(5);
//! let mut ctrl = uart.add_register("CTRL");
//! ctrl.set_offset_address(0).set_reset_value(0);
//! ctrl.add_field("EN").set_bit_range(0, 0).set_access_permission(true, true);
//! device.add_peripheral("UART1", "1.0", Some("UART0")).set_base_address(0x4000_1000);
//!
//! let xml = device.to_xml_string()?;
//! assert!(xml.contains("<name>UART0 IRQ</name>"));
//! # Ok::<(), eyre::Report>(())
//! ```

#![deny(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod device;
pub mod element;
mod writer;

pub use self::device::{
    Access, Cpu, DeviceBuilder, Endian, FieldBuilder, PeripheralBuilder, RegisterBuilder,
    DEFAULT_USAGE, SCHEMA_VERSION,
};
pub use self::element::Element;
pub use self::writer::Config;
