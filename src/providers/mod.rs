//! Provider clients.
//!
//! One module per external service, each a thin typed client over `reqwest`.
//! All clients live on the backend thread only; the UI never constructs one.
//! Response schemas are explicit serde structs so the mapping layer can rely
//! on field presence/absence instead of poking at untyped JSON.

pub mod calendar;
pub mod gmail;
pub mod google;
pub mod openai;
pub mod slack;

/// Fixed page size for every fetch operation
pub const PAGE_SIZE: u32 = 5;
