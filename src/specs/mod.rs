// src/specs/mod.rs
//! # Page and feed “specs”
//!
//! Each spec knows how to read exactly one remote document and turn it into
//! records from `crate::data`. Everything here is pure: text in, records out.
//!
//! ## What lives here
//! - `stations` – the GIS layer JSON (`{"layers": [{"depth", "features"}]}`),
//!   flattened to one `Station` per feature.
//! - `trains` – the `train_data.js` script; the `arrTrainList` array literal
//!   is cut out and every `"<no>- <name>"` entry split in two.
//! - `schedule` – a rendered schedule page; the header table becomes a
//!   `TrainInfo`, the stop table a `Vec<Stop>`.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **browser driving** (`driver`).
//! - **Persistence** (`store`) – specs never touch the filesystem.
//!
//! ## Conventions
//! - Tables are recognised by the text they contain, never by position; the
//!   site reorders its layout tables freely.
//! - Short rows and missing nested elements degrade to empty strings instead
//!   of errors. Only a feed that lacks its top-level shape is an error.
//! - Specs are tested offline against small hand-written fixtures.
pub mod schedule;
pub mod stations;
pub mod trains;
