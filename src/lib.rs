//! fixture-schema - football fixture, league and statistics records
//!
//! Records map losslessly to two external forms:
//! - the wire projection, JSON payloads exchanged with data providers and API consumers
//! - the document projection, records as stored in a document database
//!
//! Field names for both are declared per field in `schema` tables; `codec`
//! performs the mapping.

pub mod cli;
pub mod codec;
pub mod model;
pub mod observability;
pub mod schema;
